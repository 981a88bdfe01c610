//! One-shot question answering from the command line.
//!
//! Used by `campus ask "<question>"`. The answer is rendered with the
//! configured output mode, exactly as `POST /ask` would return it.

use anyhow::Result;
use campus_assist_core::format;
use campus_assist_core::router::Router;

use crate::config::Config;
use crate::loader;

/// Answer `question` and return the printable response.
pub fn answer_text(router: &Router, config: &Config, question: &str) -> Result<String> {
    let answer = router.answer(question);
    match format::render(&answer, config.chat.output_mode) {
        serde_json::Value::String(s) => Ok(s),
        other => Ok(serde_json::to_string_pretty(&other)?),
    }
}

pub fn run_ask(config: &Config, question: &str) -> Result<()> {
    let router = loader::build_router(config)?;
    println!("{}", answer_text(&router, config, question)?);
    Ok(())
}
