/// Keyword intent router for short chat messages. Anything that looks like
/// full discovery notes goes through the processor instead; this only picks
/// a canned reply for conversational prompts.
pub fn route_message(message: &str) -> String {
    let lower = message.to_lowercase();

    if lower.contains("pov") || lower.contains("worksheet") {
        "I can help you create a POV worksheet! Please share your discovery notes about the \
         customer, including their current state, challenges, technology stack, and \
         stakeholders involved."
            .to_string()
    } else if lower.contains("competitor") || lower.contains("competition") {
        "I can provide competitive intelligence and trap planting questions. What competitors \
         are you facing in this deal?"
            .to_string()
    } else if lower.contains("implementation") || lower.contains("setup") {
        "I can provide implementation guides and resources. What's the customer's technology \
         stack?"
            .to_string()
    } else {
        "I'm here to help you create POV worksheets, provide competitive intelligence, and \
         share implementation resources. What would you like to know?"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_routing() {
        assert!(route_message("How do I build a POV?").contains("POV worksheet"));
        assert!(route_message("we are up against a competitor").contains("competitive intelligence"));
        assert!(route_message("help with setup").contains("implementation guides"));
        assert!(route_message("hello").contains("What would you like to know"));
    }

    #[test]
    fn test_pov_intent_wins_over_competitor() {
        // First-match order: pov/worksheet is checked before competitor.
        let reply = route_message("pov against a competitor");
        assert!(reply.contains("POV worksheet"));
    }
}
