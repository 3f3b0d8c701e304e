//! Text sources decoded from raw MIME messages

use crate::error::{ExtractError, Result};
use tracing::debug;

/// Headers whose values may carry addresses
const ADDRESS_HEADERS: [&str; 6] = ["from", "sender", "reply-to", "to", "cc", "bcc"];

/// Decode a raw message into the ordered list of texts to scan.
///
/// Address header values come first, in header order, followed by every
/// `text/plain` and `text/html` part in depth-first order.
pub fn message_texts(raw: &[u8]) -> Result<Vec<String>> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| ExtractError::Message(e.to_string()))?;

    let mut texts: Vec<String> = parsed
        .headers
        .iter()
        .filter(|h| ADDRESS_HEADERS.contains(&h.get_key().to_lowercase().as_str()))
        .map(mailparse::MailHeader::get_value)
        .collect();

    collect_body_parts(&parsed, &mut texts);

    debug!("Decoded {} text sources from message", texts.len());

    Ok(texts)
}

fn collect_body_parts(part: &mailparse::ParsedMail, texts: &mut Vec<String>) {
    if part.subparts.is_empty() {
        let content_type = part.ctype.mimetype.to_lowercase();
        if (content_type.contains("text/plain") || content_type.contains("text/html"))
            && let Ok(body) = part.get_body()
        {
            texts.push(body);
        }
        return;
    }

    for sub in &part.subparts {
        collect_body_parts(sub, texts);
    }
}

