//! Pre-canned questions for new conversations

use rand::seq::SliceRandom;

/// Fixed candidate list shown when composing a new conversation.
pub const PRESET_QUESTIONS: [&str; 12] = [
    "What are the admission requirements for OUI?",
    "How can I check my academic result online?",
    "What is the current school calendar for this session?",
    "How do I register for courses online?",
    "What are the available scholarship opportunities?",
    "How can I contact my academic advisor?",
    "What is the process for hostel accommodation?",
    "How do I pay my school fees online?",
    "What are the graduation requirements for my program?",
    "How can I access the digital library resources?",
    "What support services are available for students?",
    "How do I apply for industrial training placement?",
];

/// Pick `count` random presets (at most the whole list).
pub fn sample_presets(count: usize) -> Vec<&'static str> {
    let mut questions: Vec<&'static str> = PRESET_QUESTIONS.to_vec();
    questions.shuffle(&mut rand::thread_rng());
    questions.truncate(count.min(questions.len()));
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_size() {
        assert_eq!(sample_presets(3).len(), 3);
        assert_eq!(sample_presets(0).len(), 0);
    }

    #[test]
    fn test_sample_caps_at_list_length() {
        assert_eq!(sample_presets(100).len(), PRESET_QUESTIONS.len());
    }

    #[test]
    fn test_samples_come_from_the_list() {
        for question in sample_presets(5) {
            assert!(PRESET_QUESTIONS.contains(&question));
        }
    }
}
