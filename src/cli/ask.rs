use crate::responder::{self, ChatMessage, Role};

pub fn run(text: &str) {
    let reply = responder::respond(&[ChatMessage::new(Role::User, text)]);
    println!("{}", reply);
}
