// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic canned responder for development mode.
//!
//! Matches the lowercased user message against an ordered list of topic
//! keyword sets and returns a fixed (response, justification) pair for the
//! first matching category. No I/O, no randomness: identical input always
//! yields identical output. The category order and keyword sets are part
//! of the observable behavior and must not be reordered.

use solace_core::AssistantReply;

const FINANCIAL_TERMS: &[&str] = &["loan", "debt", "money", "financial", "bank", "interest"];

const HEALTH_TERMS: &[&str] = &["health", "sick", "doctor", "pain", "disease", "symptom"];

const RELATIONSHIP_TERMS: &[&str] = &[
    "relationship",
    "partner",
    "marriage",
    "divorce",
    "girlfriend",
    "boyfriend",
    "spouse",
    "love",
];

const CAREER_TERMS: &[&str] = &[
    "job",
    "career",
    "work",
    "boss",
    "colleague",
    "interview",
    "resume",
    "salary",
];

const MENTAL_HEALTH_TERMS: &[&str] = &[
    "anxiety",
    "depression",
    "stress",
    "overwhelmed",
    "therapy",
    "counseling",
    "mental health",
];

const TECHNICAL_TERMS: &[&str] = &[
    "code",
    "programming",
    "software",
    "developer",
    "bug",
    "error",
    "javascript",
    "python",
    "java",
];

const PROBLEM_TERMS: &[&str] = &["problem", "solve", "issue", "help me", "assist me", "challenge"];

/// The generic-problem category yields to any more specific category.
const PROBLEM_EXCLUSIONS: &[&str] = &[
    "technical",
    "code",
    "software",
    "financial",
    "health",
    "relationship",
    "career",
    "mental health",
];

const GREETING_TERMS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "greetings",
    "morning",
    "afternoon",
    "evening",
];

const SHORT_EXACT: &[&str] = &["?", "test", "ok"];

fn contains_any(message: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| message.contains(t))
}

fn reply(content: &str, justification: &str) -> AssistantReply {
    AssistantReply {
        content: content.to_string(),
        justification: justification.to_string(),
    }
}

/// Return the canned reply for a user message.
///
/// Categories are evaluated top to bottom; the first match wins.
pub fn canned_reply(user_message: &str) -> AssistantReply {
    let lower = user_message.to_lowercase();

    if contains_any(&lower, FINANCIAL_TERMS) {
        return reply(
            "I understand you're facing financial challenges. Here are some steps that might help: \n\n\
             1. Consider debt consolidation through a personal loan from a reputable bank, which often has lower interest rates than informal loans.\n\
             2. Check if you qualify for any government assistance programs.\n\
             3. Create a detailed budget to track your expenses and identify areas where you can save.\n\
             4. Consider speaking with a financial advisor who specializes in debt management.\n\
             5. If possible, try to negotiate with your relatives for a lower interest rate or extended payment terms.\n\n\
             Would you like me to elaborate on any of these suggestions?",
            "Financial stress can be overwhelming, and having a structured approach with multiple options provides a sense of control and practical next steps.",
        );
    }

    if contains_any(&lower, HEALTH_TERMS) {
        return reply(
            "I hear you're concerned about health issues. While I'm not a medical professional, I can suggest some general steps:\n\n\
             1. Consider scheduling an appointment with a healthcare provider for a proper diagnosis.\n\
             2. Keep track of your symptoms - when they occur, what makes them better or worse.\n\
             3. Ensure you're maintaining basic health habits: adequate sleep, hydration, and nutrition.\n\
             4. Be careful about self-diagnosing using internet sources.\n\n\
             Remember that your health is a priority, and seeking professional medical advice is important.",
            "Health concerns often benefit from professional medical attention rather than self-diagnosis, and tracking symptoms provides valuable information for healthcare providers.",
        );
    }

    if contains_any(&lower, RELATIONSHIP_TERMS) {
        return reply(
            "Relationships can be complex, and I appreciate you sharing this with me. Here are some thoughts:\n\n\
             1. Open communication is key - consider expressing your feelings using 'I' statements to avoid sounding accusatory.\n\
             2. Active listening can help both parties feel heard and validated.\n\
             3. Setting healthy boundaries is important for any relationship.\n\
             4. Sometimes, a neutral third party like a relationship counselor can provide valuable guidance.\n\n\
             What aspects of the relationship are most challenging for you right now?",
            "Communication and understanding are foundational to healthy relationships, and approaching issues collaboratively rather than confrontationally tends to lead to better outcomes.",
        );
    }

    if contains_any(&lower, CAREER_TERMS) {
        return reply(
            "Career development is an important aspect of life. Based on what you've shared, here are some thoughts:\n\n\
             1. Consider your long-term career goals and how your current situation aligns with them.\n\
             2. Networking and professional development can open new opportunities.\n\
             3. When facing workplace challenges, documenting incidents and maintaining professionalism is advisable.\n\
             4. For job searches, tailoring your resume and preparation for interviews are crucial steps.\n\n\
             Could you tell me more about your specific career aspirations or challenges?",
            "Career decisions benefit from aligning short-term actions with long-term goals, and professional development is an ongoing process that extends beyond formal education.",
        );
    }

    if contains_any(&lower, MENTAL_HEALTH_TERMS) {
        return reply(
            "I'm sorry to hear you're struggling with these feelings. Your mental wellbeing is important, and it's brave of you to talk about it.\n\n\
             1. Consider speaking with a mental health professional who can provide personalized support.\n\
             2. Self-care routines, including physical activity and mindfulness practices, can be helpful supplements to professional care.\n\
             3. Setting small, achievable goals may help when feeling overwhelmed.\n\
             4. Remember that seeking help is a sign of strength, not weakness.\n\n\
             Would you like to talk more about how you've been feeling?",
            "Mental health challenges benefit from professional support, and acknowledging feelings without judgment creates a safe space for discussion.",
        );
    }

    if contains_any(&lower, TECHNICAL_TERMS) {
        return reply(
            "For technical challenges, a systematic approach often works best:\n\n\
             1. Break down the problem into smaller, manageable parts.\n\
             2. Check documentation and existing solutions in forums like Stack Overflow.\n\
             3. Use debugging tools to identify where the issue occurs.\n\
             4. Consider implementing automated tests to catch similar issues in the future.\n\
             5. Sometimes, explaining the problem to someone else (or even to yourself) can lead to insights.\n\n\
             Could you provide more details about the specific technical challenge you're facing?",
            "Technical problems often benefit from systematic troubleshooting rather than trial-and-error approaches, and documentation and community resources are valuable tools.",
        );
    }

    if contains_any(&lower, PROBLEM_TERMS) && !contains_any(&lower, PROBLEM_EXCLUSIONS) {
        return reply(
            "I understand you're looking for help with a problem or challenge. I'll do my best to assist. To get a clearer picture, could you tell me a bit more about it?\n\n\
             For instance:\n\
             1. Can you describe the main challenge or what you're trying to achieve?\n\
             2. Are there any specific constraints or factors I should be aware of?\n\
             3. Have you tried anything already, or do you have any initial thoughts on how to approach it?\n\n\
             The more information you can provide, the better I can help you explore solutions.",
            "Gathering specific details about the problem upfront helps in formulating a targeted and effective response strategy.",
        );
    }

    if contains_any(&lower, GREETING_TERMS) {
        return reply(
            "Hello! I'm here to help with any questions or challenges you're facing. Feel free to share what's on your mind, and I'll do my best to provide helpful information or perspectives.",
            "A warm welcome establishes rapport and encourages open communication.",
        );
    }

    let trimmed = user_message.trim();
    if trimmed.chars().count() < 5 || SHORT_EXACT.contains(&trimmed) {
        return reply(
            "I'm not sure I understand completely. Could you provide more details about what you'd like to discuss or what kind of help you're looking for? I'm here to assist with a variety of topics and concerns.",
            "Requesting clarification when messages are unclear helps ensure the conversation moves in a productive direction.",
        );
    }

    reply(
        "Thank you for sharing that with me. I'm here to help and would like to understand your situation better. Could you tell me more about what you're experiencing or what kind of support you're looking for?",
        "Open-ended questions encourage elaboration and help gather more information to provide appropriate support.",
    )
}
