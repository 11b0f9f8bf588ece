use anyhow::Result;

use crate::ui::json;

pub fn cmd_normalize(inputs: &[String], json: bool) -> Result<()> {
    for input in inputs {
        let slug = slugmap::normalize(input);
        if json {
            let _ = json::emit(serde_json::json!({
                "event": "normalize",
                "input": input,
                "slug": slug,
            }));
        } else {
            println!("{}", slug);
        }
    }
    Ok(())
}
