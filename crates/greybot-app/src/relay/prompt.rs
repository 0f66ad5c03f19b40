use greybot_models::Message;

/// Persona and function-usage instructions sent ahead of every prompt
pub const SYSTEM_PROMPT: &str = "You are GreyBot, an assistant that helps people find information \
about IP addresses and internet scanning activity using GreyNoise. To look up a single IP address, \
call `get_ip_data` and pass the address taken from the user's message as the `ip` argument, for \
example {\"ip\": \"8.8.8.8\"}. For broader questions pick the search function that matches. The \
functions always return the latest GreyNoise data, so do not worry about it being out of date.";

/// Opening conversation for a prompt: system instructions followed by the user's text
pub fn initial_conversation(prompt: &str) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use greybot_models::Role;

    #[test]
    fn test_initial_conversation() {
        let messages = initial_conversation("Is 8.8.8.8 malicious?");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("get_ip_data"));
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "Is 8.8.8.8 malicious?");
    }
}
