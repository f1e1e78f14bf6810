use pulldown_cmark::{html, Event, Options, Parser};

use crate::{auth::Role, include_res, res::escape_html};

pub struct Conversation {
    pub id: &'static str,
    pub participant: &'static str,
    pub participant_role: Role,
    pub last_message: &'static str,
    pub unread: u32,
}

pub struct Message {
    pub sender: &'static str,
    pub content: &'static str,
    pub timestamp: &'static str,
    pub read: bool,
}

pub static CONVERSATIONS: &[Conversation] = &[
    Conversation {
        id: "1",
        participant: "Maria Doe",
        participant_role: Role::Diaspora,
        last_message: "Thanks for connecting! Looking forward to collaborating.",
        unread: 2,
    },
    Conversation {
        id: "2",
        participant: "AADF Staff",
        participant_role: Role::Admin,
        last_message: "New opportunities available in the portal.",
        unread: 0,
    },
    Conversation {
        id: "3",
        participant: "Alex Johnson",
        participant_role: Role::Alumni,
        last_message: "Great presentation at the conference!",
        unread: 1,
    },
];

pub static THREAD: &[Message] = &[
    Message {
        sender: "John Smith",
        content: "Hi, I'm interested in collaborating with diaspora members on **education** projects.",
        timestamp: "2024-01-15 10:00",
        read: true,
    },
    Message {
        sender: "Maria Doe",
        content: "Great! I'd love to connect. Let's schedule a call next week.",
        timestamp: "2024-01-15 10:05",
        read: true,
    },
    Message {
        sender: "John Smith",
        content: "Perfect, I'll send you my availability.",
        timestamp: "2024-01-15 10:10",
        read: false,
    },
];

/// Conversations whose participant name contains `term`, ignoring case.
pub fn filter_conversations(term: &str) -> impl Iterator<Item = &'static Conversation> {
    let term = term.trim().to_lowercase();
    CONVERSATIONS
        .iter()
        .filter(move |conv| conv.participant.to_lowercase().contains(&term))
}

/// Renders message markdown. Raw HTML in the source is shown as text.
pub fn markdown_to_html(content: &str) -> String {
    let parser = Parser::new_ext(content, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        _ => event,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

pub fn render(term: &str) -> String {
    let mut conversations = String::new();
    for conv in filter_conversations(term) {
        let unread = if conv.unread > 0 {
            format!(r#"<span class="badge">{}</span>"#, conv.unread)
        } else {
            String::new()
        };
        conversations += &include_res!(str, "/pages/conversation_item.html")
            .replace("{id}", conv.id)
            .replace("{participant}", &escape_html(conv.participant))
            .replace("{role}", conv.participant_role.label())
            .replace("{last_message}", &escape_html(conv.last_message))
            .replace("{unread}", &unread);
    }
    if conversations.is_empty() {
        conversations = r#"<p class="muted">No conversations match.</p>"#.to_owned();
    }

    let mut thread = String::new();
    for msg in THREAD {
        thread += &include_res!(str, "/pages/message.html")
            .replace("{sender}", &escape_html(msg.sender))
            .replace("{timestamp}", msg.timestamp)
            .replace("{state}", if msg.read { "read" } else { "unread" })
            .replace("{content}", &markdown_to_html(msg.content));
    }

    include_res!(str, "/pages/messages.html")
        .replace("{conversations}", &conversations)
        .replace("{thread}", &thread)
        .replace("{term}", &escape_html(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive_substring() {
        let names: Vec<_> = filter_conversations("DOE").map(|c| c.participant).collect();
        assert_eq!(names, ["Maria Doe"]);

        let names: Vec<_> = filter_conversations("a").map(|c| c.participant).collect();
        assert_eq!(names, ["Maria Doe", "AADF Staff", "Alex Johnson"]);
    }

    #[test]
    fn empty_search_lists_everything() {
        assert_eq!(filter_conversations("").count(), CONVERSATIONS.len());
        assert_eq!(filter_conversations("   ").count(), CONVERSATIONS.len());
    }

    #[test]
    fn unmatched_search_lists_nothing() {
        assert_eq!(filter_conversations("zzz").count(), 0);
        assert!(render("zzz").contains("No conversations match."));
    }

    #[test]
    fn markdown_renders_but_html_does_not() {
        let out = markdown_to_html("**hi** <script>alert(1)</script>");
        assert!(out.contains("<strong>hi</strong>"));
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn search_term_is_escaped_back_into_the_form() {
        assert!(render("\"><b>").contains("&quot;&gt;&lt;b&gt;"));
    }
}
