//! User-facing message templates
//!
//! `WELCOME`, `HELP` and the photo caption are MarkdownV2; everything else is
//! sent as plain text.

use indoc::indoc;

use super::markdown::{escape_markdown_v2, truncate_chars};

/// Reply to /start
pub const WELCOME: &str = indoc! {r#"
    🎨 *Image Generator Bot* 🎨

    मैं आपके लिए AI से images बना सकता हूँ\!

    *कैसे उपयोग करें:*
    \- बस मुझे कोई भी description भेजें
    \- मैं उसके लिए image generate करूंगा

    *Examples:*
    \- "एक सुंदर sunset beach पर"
    \- "a cute cat wearing glasses"
    \- "futuristic city at night"

    *Commands:*
    /start \- यह message
    /help \- Help और examples

    अब आप मुझे कोई भी prompt भेज सकते हैं\! 🚀"#};

/// Reply to /help
pub const HELP: &str = indoc! {r#"
    🔧 *Help & Examples* 🔧

    *Good Prompts:*
    \- "beautiful landscape with mountains"
    \- "a robot playing guitar"
    \- "cute puppy in a garden"
    \- "abstract art with bright colors"

    *Tips:*
    \- English prompts work better
    \- Be specific about details
    \- Mention style \(realistic, cartoon, etc\.\)
    \- Add colors, lighting, mood

    *Commands:*
    /start \- Welcome message
    /help \- This help message

    Just send me any text and I'll create an image\! ✨"#};

/// Interim reply while the model runs
pub const WORKING: &str = "🎨 Image generate kar raha hoon... Please wait!";

/// Final reply when the inference endpoint gave no image
pub const GENERATION_FAILED: &str =
    "❌ Sorry, image generate nahi ho saki. Please try again later or try a different prompt.";

/// Final reply for any other fault while handling a prompt
pub const UNEXPECTED_ERROR: &str = "❌ Koi error aa gaya hai. Please try again!";

/// Telegram rejects photo captions longer than this (after entity parsing)
const CAPTION_LIMIT: usize = 1024;

/// Room left for the prompt once the fixed caption text is accounted for
const CAPTION_PROMPT_LIMIT: usize = CAPTION_LIMIT - 64;

/// MarkdownV2 caption for a generated image
pub fn image_caption(prompt: &str) -> String {
    let prompt = truncate_chars(prompt, CAPTION_PROMPT_LIMIT);
    format!(
        "🎨 *Generated Image*\n\n*Prompt:* {}\n\n_Made with ❤️ by AI_",
        escape_markdown_v2(&prompt)
    )
}
