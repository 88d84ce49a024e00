use rand::Rng;

use crate::intent::classify_chat;
use crate::models::{ChatClassification, ChatIntent, Script};
use crate::rules;
use crate::select::{pick, truncate_utf16};

pub fn generate_chat_response<R>(input: &str, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    compose_chat_reply(classify_chat(input), input, rng)
}

/// Renders the reply for an already-classified message. Never empty.
pub fn compose_chat_reply<R>(classification: ChatClassification, input: &str, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    match classification.script {
        Script::Devanagari => hindi_reply(classification.intent, input),
        Script::Latin => english_reply(classification.intent, input, rng),
    }
}

fn hindi_reply(intent: ChatIntent, input: &str) -> String {
    let reply = match intent {
        ChatIntent::Greeting => rules::HINDI_GREETING,
        ChatIntent::Weather => rules::HINDI_WEATHER,
        ChatIntent::Help => rules::HINDI_HELP,
        ChatIntent::Identity => rules::HINDI_IDENTITY,
        ChatIntent::Thanks => rules::HINDI_THANKS,
        _ => {
            return format!(
                "आपका सवाल बहुत दिलचस्प है। \"{}...\" — इस विषय पर मेरी राय यह है कि हर समस्या का एक समाधान होता है। क्या आप इसके बारे में और बताना चाहेंगे?",
                truncate_utf16(input, 30)
            )
        }
    };

    reply.to_string()
}

fn english_reply<R>(intent: ChatIntent, input: &str, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let reply = match intent {
        ChatIntent::Greeting => rules::ENGLISH_GREETING,
        ChatIntent::HowAreYou => rules::ENGLISH_HOW_ARE_YOU,
        ChatIntent::Weather => rules::ENGLISH_WEATHER,
        ChatIntent::Identity => rules::ENGLISH_IDENTITY,
        ChatIntent::Help => rules::ENGLISH_HELP,
        ChatIntent::Thanks => rules::ENGLISH_THANKS,
        ChatIntent::Origin => rules::ENGLISH_ORIGIN,
        ChatIntent::Capability => rules::ENGLISH_CAPABILITY,
        ChatIntent::Joke => *pick(rng, &rules::JOKES),
        ChatIntent::Math => rules::ENGLISH_MATH,
        ChatIntent::Relationships => rules::ENGLISH_RELATIONSHIPS,
        ChatIntent::Unknown => return thoughtful_reply(input, rng),
    };

    reply.to_string()
}

fn thoughtful_reply<R>(input: &str, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let excerpt = truncate_utf16(input, 40).trim();

    let replies = [
        format!("That's an interesting thought about \"{excerpt}\". There are many perspectives to consider here. Could you elaborate further? I'd love to explore this topic deeper with you."),
        "I find that question quite compelling. The way I see it, every situation has multiple dimensions worth examining. What specific aspect would you like to focus on?".to_string(),
        "Great point! This touches on something important. Let me think about this carefully — the key insight here is that context matters greatly. What's your take on it?".to_string(),
        "I appreciate you sharing that with me. To give you the most helpful response, could you tell me more about what you're looking for? I want to make sure I understand your needs fully.".to_string(),
        "That's worth exploring! In my analysis, this kind of question often leads to fascinating discoveries. Let's think through this together — what do you already know about it?".to_string(),
    ];

    pick(rng, &replies).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn first_choice() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn hindi_greeting_is_fixed() {
        let reply = generate_chat_response("नमस्ते", &mut first_choice());
        assert_eq!(reply, rules::HINDI_GREETING);
    }

    #[test]
    fn hindi_fallback_quotes_first_thirty_characters() {
        let input = "क्या बात है यह एक बहुत लंबा वाक्य है जो तीस अक्षरों से अधिक है";
        let reply = generate_chat_response(input, &mut first_choice());
        assert!(reply.starts_with("आपका सवाल बहुत दिलचस्प है। \""));
        assert!(reply.contains("\"क्या बात है यह एक बहुत लंबा वा...\""));
        assert_eq!(truncate_utf16(input, 30).encode_utf16().count(), 30);
        assert!(!reply.contains(input));
    }

    #[test]
    fn thanks_and_help_resolve_to_help() {
        let reply = generate_chat_response("thanks, can you help?", &mut first_choice());
        assert_eq!(reply, rules::ENGLISH_HELP);
    }

    #[test]
    fn jokes_come_from_the_fixed_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let reply = generate_chat_response("tell me a joke", &mut rng);
            assert!(rules::JOKES.contains(&reply.as_str()));
        }
        let reply = generate_chat_response("tell me a joke", &mut first_choice());
        assert_eq!(reply, rules::JOKES[0]);
    }

    #[test]
    fn fallback_embeds_trimmed_excerpt() {
        let reply = generate_chat_response(
            "  quantum gardening and the meaning of moss in winter  ",
            &mut first_choice(),
        );
        assert!(reply.starts_with(
            "That's an interesting thought about \"quantum gardening and the meaning of m\""
        ));
    }

    #[test]
    fn seeded_rng_gives_repeatable_fallbacks() {
        let a = generate_chat_response("purple elephants", &mut StdRng::seed_from_u64(42));
        let b = generate_chat_response("purple elephants", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn empty_input_still_replies() {
        let reply = generate_chat_response("", &mut first_choice());
        assert!(!reply.is_empty());
    }
}
