//! Display content for each sentiment.

use colored::{ColoredString, Colorize};
use sentiview::Sentiment;

/// Font Awesome icon class for a sentiment.
pub fn icon_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "fa-thumbs-up",
        Sentiment::Negative => "fa-thumbs-down",
        Sentiment::Neutral => "fa-question-circle",
    }
}

/// Capitalized display text.
pub fn display_text(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "Positive",
        Sentiment::Negative => "Negative",
        Sentiment::Neutral => "Neutral",
    }
}

/// Terminal rendering with a glyph and color.
pub fn terminal(sentiment: Sentiment) -> ColoredString {
    match sentiment {
        Sentiment::Positive => format!("+ {}", display_text(sentiment)).green().bold(),
        Sentiment::Negative => format!("- {}", display_text(sentiment)).red().bold(),
        Sentiment::Neutral => format!("? {}", display_text(sentiment)).yellow().bold(),
    }
}
