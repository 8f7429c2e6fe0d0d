// Built-in response content. Keys are matched lower-cased; order matters
// wherever the router scans a table for the first contained key.

pub const STATIC_RESPONSES: &[(&str, &str)] = &[
    (
        "how are you",
        "I'm a bot, but I'm fully operational and ready to help you stay safe online!",
    ),
    (
        "what's your purpose",
        "My mission is to educate and empower you with cybersecurity knowledge.",
    ),
    (
        "what can i ask you about",
        "You can ask me about password safety, phishing, safe browsing, and general cybersecurity tips.",
    ),
    (
        "safe browsing",
        "Avoid clicking unknown links, use HTTPS websites, and keep your browser up to date.",
    ),
];

pub const KEYWORD_RESPONSES: &[(&str, &str)] = &[
    (
        "password",
        "Make sure to use strong, unique passwords for each account. Consider using a password manager.",
    ),
    (
        "scam",
        "Watch out for online scams. If something sounds too good to be true, it probably is.",
    ),
    (
        "privacy",
        "Protect your privacy by limiting what you share online and reviewing app permissions regularly.",
    ),
];

pub const TOPIC_RESPONSES: &[(&str, &[&str])] = &[
    (
        "phishing",
        &[
            "Watch out for emails with urgent requests or attachments.",
            "Always verify the sender's email address before clicking links.",
            "Don’t enter credentials on suspicious login pages.",
            "Phishing often mimics trusted brands—double-check URLs.",
            "Enable 2FA to protect accounts even if your password is phished.",
        ],
    ),
    (
        "password safety",
        &[
            "Use a mix of letters, numbers, and symbols in your passwords.",
            "Avoid using the same password across multiple sites.",
            "Consider using a trusted password manager.",
            "Change your passwords regularly, especially after a breach.",
        ],
    ),
];

pub const SENTIMENT_RESPONSES: &[(&str, &str)] = &[
    (
        "worried",
        "It's completely understandable to feel that way. Remember, staying informed helps you stay safe!",
    ),
    (
        "frustrated",
        "I know cybersecurity can be challenging. I'm here to help you step-by-step.",
    ),
    (
        "curious",
        "That's great! Curiosity is the first step toward becoming cybersecurity savvy.",
    ),
];
