//! Companion chat transcript.
//!
//! DESIGN
//! ======
//! The transcript is local to the browser tab: the server keeps its own
//! per-thread memory and only ever sees the latest message. One reply may be
//! pending at a time; `can_send` gates the input while it is.
//!
//! Each transcript owns a random server thread id, so conversations from
//! different tabs and users never share server-side context.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Opening line of every conversation.
pub const GREETING: &str = "Hi there, I'm your mental health assistant. How are you feeling today?";

/// Shown when the chat endpoint cannot be reached.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble connecting right now. Please try again in a moment.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

/// Emotional register of an assistant reply, used for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmotionTone {
    Calm,
    Anxious,
    Sad,
    Angry,
    Hopeful,
    Distressed,
}

impl EmotionTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Calm => "tone-calm",
            Self::Anxious => "tone-anxious",
            Self::Sad => "tone-sad",
            Self::Angry => "tone-angry",
            Self::Hopeful => "tone-hopeful",
            Self::Distressed => "tone-distressed",
        }
    }
}

/// A single transcript line. `emotion` is only set on assistant messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub author: Author,
    pub content: String,
    pub emotion: Option<EmotionTone>,
}

impl ChatMessage {
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }
}

#[derive(Clone, Debug)]
pub struct ChatState {
    /// Server thread this transcript talks to.
    pub thread_id: String,
    pub messages: Vec<ChatMessage>,
    pub awaiting_reply: bool,
    pub speak_replies: bool,
    next_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        let mut state = Self {
            thread_id: new_thread_id(),
            messages: Vec::new(),
            awaiting_reply: false,
            speak_replies: false,
            next_id: 1,
        };
        state.push(Author::Assistant, GREETING.to_owned(), Some(EmotionTone::Calm));
        state
    }
}

impl ChatState {
    /// `true` when `input` has content and no reply is pending.
    #[must_use]
    pub fn can_send(&self, input: &str) -> bool {
        !self.awaiting_reply && !input.trim().is_empty()
    }

    /// Append the user's message and mark a reply pending.
    ///
    /// Returns the trimmed text to send, or `None` if nothing was sent.
    pub fn push_user(&mut self, input: &str) -> Option<String> {
        if !self.can_send(input) {
            return None;
        }
        let content = input.trim().to_owned();
        self.push(Author::User, content.clone(), None);
        self.awaiting_reply = true;
        Some(content)
    }

    /// Append the assistant's reply and clear the pending flag.
    pub fn push_reply(&mut self, content: String) {
        let tone = detect_tone(&content);
        self.push(Author::Assistant, content, Some(tone));
        self.awaiting_reply = false;
    }

    /// Append the fallback line after a failed request.
    pub fn push_fallback(&mut self) {
        self.push(Author::Assistant, FALLBACK_REPLY.to_owned(), Some(EmotionTone::Calm));
        self.awaiting_reply = false;
    }

    fn push(&mut self, author: Author, content: String, emotion: Option<EmotionTone>) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            author,
            content,
            emotion,
        });
        self.next_id += 1;
    }
}

fn new_thread_id() -> String {
    format!("chat-{}", uuid::Uuid::new_v4().simple())
}

/// Keyword guess at a reply's tone. Defaults to `Calm`.
#[must_use]
pub fn detect_tone(text: &str) -> EmotionTone {
    const RULES: [(EmotionTone, &[&str]); 5] = [
        (EmotionTone::Distressed, &["crisis", "emergency", "helpline", "hotline", "988"]),
        (EmotionTone::Anxious, &["anxious", "anxiety", "worried", "panic", "breathing"]),
        (EmotionTone::Sad, &["sad", "lonely", "grief", "loss", "hurt"]),
        (EmotionTone::Angry, &["angry", "frustrat", "anger", "irritat"]),
        (EmotionTone::Hopeful, &["hope", "progress", "proud", "together", "better"]),
    ];
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map_or(EmotionTone::Calm, |(tone, _)| *tone)
}
