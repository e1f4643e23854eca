//! Simulated coach chat.
//!
//! No model behind it: a topic greeting shows up shortly after the chat
//! opens, and every user message gets a canned reply after a typing delay.
//! Timers are checked on `tick(now)` from the frame loop.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const GREETING_DELAY: Duration = Duration::from_millis(300);
const REPLY_DELAY: Duration = Duration::from_millis(1500);
const DEMO_REPLY: &str = "Got it! Incorporating that into your plan. Keep pushing! 🔥 (Demo Response)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Workout,
    Diet,
    Question,
    Motivation,
}

impl Topic {
    pub fn greeting(self) -> &'static str {
        match self {
            Topic::Workout => "Ready to crush it? 💪 Let's build your workout plan. What equipment do you have access to?",
            Topic::Diet => "Fueling your body right is key! 🥑 Any dietary preferences or allergies I should know?",
            Topic::Question => "I'm your fitness assistant. Ask me anything about training, recovery, or nutrition!",
            Topic::Motivation => "Mindset is everything. 🧠 How are you feeling about your goals today?",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    /// Local wall-clock time, `HH:MM`
    pub timestamp: String,
}

/// Chat session with the coach.
pub struct CoachChat {
    topic: Topic,
    messages: Vec<ChatMessage>,
    greeting_due: Option<Instant>,
    /// One pending reply per user message, oldest first
    replies_due: VecDeque<Instant>,
    next_id: u64,
}

impl CoachChat {
    /// Open a chat on `topic`; the greeting arrives after a short delay.
    pub fn open(topic: Topic, now: Instant) -> Self {
        Self {
            topic,
            messages: Vec::new(),
            greeting_due: Some(now + GREETING_DELAY),
            replies_due: VecDeque::new(),
            next_id: 0,
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Coach is "typing" a reply.
    pub fn is_typing(&self) -> bool {
        !self.replies_due.is_empty()
    }

    /// Switch topic: clears the history and schedules a new greeting.
    pub fn set_topic(&mut self, topic: Topic, now: Instant) {
        if topic == self.topic {
            return;
        }
        *self = Self {
            next_id: self.next_id,
            ..Self::open(topic, now)
        };
    }

    /// Send a user message. Blank input is ignored; returns whether it was sent.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.push(Sender::User, text.to_string());
        self.replies_due.push_back(now + REPLY_DELAY);
        true
    }

    /// Deliver due greetings/replies. Returns `true` if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.greeting_due.is_some_and(|due| now >= due) {
            self.greeting_due = None;
            self.push(Sender::Bot, self.topic.greeting().to_string());
            changed = true;
        }
        while self.replies_due.front().is_some_and(|due| now >= *due) {
            self.replies_due.pop_front();
            self.push(Sender::Bot, DEMO_REPLY.to_string());
            changed = true;
        }
        changed
    }

    /// Next pending deadline, so the UI can schedule a repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.greeting_due, self.replies_due.front().copied()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: chrono::Local::now().format("%H:%M").to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_after_delay() {
        let t0 = Instant::now();
        let mut chat = CoachChat::open(Topic::Diet, t0);
        assert!(!chat.tick(t0 + Duration::from_millis(100)));
        assert!(chat.messages().is_empty());
        assert!(chat.tick(t0 + Duration::from_millis(300)));
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].sender, Sender::Bot);
        assert_eq!(chat.messages()[0].text, Topic::Diet.greeting());
        assert_eq!(chat.messages()[0].timestamp.len(), 5);
    }

    #[test]
    fn test_reply_flow() {
        let t0 = Instant::now();
        let mut chat = CoachChat::open(Topic::Question, t0);
        chat.tick(t0 + GREETING_DELAY);

        assert!(!chat.send("   ", t0));
        assert!(chat.send("How many sets?", t0 + Duration::from_secs(1)));
        assert!(chat.is_typing());
        assert_eq!(chat.messages().last().map(|m| m.sender), Some(Sender::User));

        chat.tick(t0 + Duration::from_millis(2000));
        assert!(chat.is_typing());
        chat.tick(t0 + Duration::from_millis(2500));
        assert!(!chat.is_typing());
        assert_eq!(chat.messages().len(), 3);
        assert_eq!(chat.messages()[2].text, DEMO_REPLY);
    }

    #[test]
    fn test_each_message_gets_a_reply() {
        let t0 = Instant::now();
        let mut chat = CoachChat::open(Topic::Question, t0);
        chat.tick(t0 + GREETING_DELAY);
        chat.send("first", t0 + Duration::from_millis(400));
        chat.send("second", t0 + Duration::from_millis(600));
        assert_eq!(chat.next_deadline(), Some(t0 + Duration::from_millis(1900)));

        // First reply due, second still pending
        chat.tick(t0 + Duration::from_millis(2000));
        assert!(chat.is_typing());
        assert_eq!(chat.next_deadline(), Some(t0 + Duration::from_millis(2100)));

        chat.tick(t0 + Duration::from_secs(10));
        assert!(!chat.is_typing());
        let bot = chat.messages().iter().filter(|m| m.sender == Sender::Bot).count();
        assert_eq!(chat.messages().len(), 5);
        assert_eq!(bot, 3);
    }

    #[test]
    fn test_same_topic_keeps_pending_greeting() {
        let t0 = Instant::now();
        let mut chat = CoachChat::open(Topic::Workout, t0);
        chat.set_topic(Topic::Workout, t0 + Duration::from_millis(200));
        assert_eq!(chat.next_deadline(), Some(t0 + GREETING_DELAY));
        assert!(chat.tick(t0 + GREETING_DELAY));
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_set_topic_resets() {
        let t0 = Instant::now();
        let mut chat = CoachChat::open(Topic::Question, t0);
        chat.tick(t0 + GREETING_DELAY);
        chat.send("hi", t0);
        chat.set_topic(Topic::Motivation, t0 + Duration::from_secs(1));
        assert!(chat.messages().is_empty());
        assert!(!chat.is_typing());
        assert_eq!(chat.topic(), Topic::Motivation);
        assert!(chat.next_deadline().is_some());
    }

    #[test]
    fn test_message_ids_unique() {
        let t0 = Instant::now();
        let mut chat = CoachChat::open(Topic::Workout, t0);
        chat.tick(t0 + GREETING_DELAY);
        chat.send("a", t0);
        chat.send("b", t0);
        let mut ids: Vec<u64> = chat.messages().iter().map(|m| m.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
