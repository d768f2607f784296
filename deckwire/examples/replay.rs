//! End-to-end walkthrough over the replay transport.
//!
//! Feeds two canned backend responses through a session — a healthy one and
//! a truncated one — and prints the transcript and deck after each query.
//!
//! ```sh
//! cargo run --example replay
//! ```

use anyhow::Result;
use deckwire::prelude::*;

const HEALTHY_RESPONSE: &str = r#"{"events":[
    {"author":"research_agent","id":"e1","content":{"parts":[{"text":"gathered 12 sources"}]}},
    {"author":"presentation_agent","id":"e2","content":{"parts":[
        {"functionResponse":{"response":{"result":
            "<Slides>[{\"id\":\"slide_1\",\"title\":\"Pythagorean Theorem\",\"html\":\"<html><title>Pythagorean Theorem</title></html>\"},{\"id\":\"slide_2\",\"title\":\"A Visual Proof\",\"html\":\"<html><title>A Visual Proof</title></html>\"}]</Slides>"
        }}}
    ]}},
    {"author":"coordinator","id":"e3","content":{"parts":[
        {"text":"I have completed my research and generated a presentation."}
    ]}}
]}"#;

// Cut off mid-array: the second artifact and the closing marker are gone.
const TRUNCATED_RESPONSE: &str = r#"{"events":[
    {"author":"presentation_agent","id":"e1","content":{"parts":[
        {"functionResponse":{"response":{"result":
            "<Slides>[{\"id\":\"slide_1\",\"title\":\"Recovered\",\"html\":\"<html>line\\nbreak</html>\"},{\"id\":\"slide_2\",\"ti"
        }}}
    ]}}
]}"#;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deckwire=debug".into()),
        )
        .init();

    let transport = ReplayTransport::new()
        .with_chunk_size(16)
        .with_response(HEALTHY_RESPONSE)
        .with_response(TRUNCATED_RESPONSE);

    let mut session = Session::new("replay-session", transport)
        .with_greeting("Hello! Give me a topic and I will generate a presentation for you.");

    for prompt in ["Pythagorean Theorem", "Now something that truncates"] {
        session.submit(prompt).await?;
        print_state(&session);
    }

    Ok(())
}

fn print_state<T>(session: &Session<T>) {
    println!("--- transcript ---");
    for message in session.transcript().messages() {
        println!("{:>2} {:?}: {}", message.id, message.role, message.content);
    }
    match session.deck() {
        Some(deck) => {
            println!("--- deck ({} slides) ---", deck.len());
            for slide in deck {
                println!("  [{}] {}", slide.id, slide.display_title());
            }
        }
        None => println!("--- no deck ---"),
    }
    println!();
}
