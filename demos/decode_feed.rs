//! Decodes an AIS feed read line by line from stdin.
//!
//! ```text
//! cargo run --example decode_feed < feed.nmea
//! ```

use std::{
    collections::HashMap,
    error::Error,
    io::{self, BufRead},
};

use nmea0183_ais::{
    Sentence,
    ais::{AisMessage, VdmMessage},
};

/// Chains waiting for their remaining fragments, keyed by sequence id and channel.
type Pending = HashMap<(Option<u8>, Option<String>), Sentence>;

fn route(pending: &mut Pending, sentence: Sentence) -> Option<Sentence> {
    let key = (sentence.sequence_id(), sentence.channel().map(str::to_owned));

    let Some(number) = sentence.message_number() else {
        eprintln!("unreadable fragment index: {}", sentence.original());
        return None;
    };

    if number == 1 {
        if sentence.is_complete() {
            return Some(sentence);
        }
        if let Some(stale) = pending.insert(key, sentence) {
            eprintln!("dropping incomplete message: {}", stale.original());
        }
        return None;
    }

    let Some(mut head) = pending.remove(&key) else {
        eprintln!("fragment without a head: {}", sentence.original());
        return None;
    };
    head.add_fragment(sentence);

    if head.is_complete() {
        Some(head)
    } else {
        pending.insert(key, head);
        None
    }
}

fn print(message: &AisMessage) {
    println!(
        "type {} from {} ({})",
        message.message_type(),
        message
            .source_mmsi()
            .map_or_else(|| "?".to_owned(), |mmsi| mmsi.to_string()),
        message.mmsi_category_description(),
    );

    for (name, value) in message.values() {
        match value {
            Some(value) => println!("  {name}: {value}"),
            None => println!("  {name}: -"),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut pending = Pending::new();

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let sentence = match Sentence::parse(&line) {
            Ok(sentence) => sentence,
            Err(e) => {
                eprintln!("unparsable line {line:?}: {e}");
                continue;
            }
        };

        if !sentence.is_ais() {
            continue;
        }
        if !sentence.checksum_ok() {
            eprintln!(
                "checksum mismatch (expected {}): {line}",
                sentence.calculated_checksum()
            );
            continue;
        }

        if let Some(head) = route(&mut pending, sentence) {
            match head.ais() {
                Ok(message) => print(&message),
                Err(e) => eprintln!("undecodable payload {}: {e}", head.original()),
            }
        }
    }

    for head in pending.values() {
        eprintln!("incomplete message at end of input: {}", head.original());
    }

    Ok(())
}
