//! Run report generation
//!
//! Renders the outcome of one scramble cycle as plain text or JSON.

use crate::config::{CallbackMode, OutputFormat};
use anyhow::Result;
use chrono::{DateTime, Utc};
use scramble_core::Transmission;
use serde::Serialize;

/// Everything known about one scramble run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub mode: CallbackMode,
    pub callback: String,
    pub transmission: Transmission,
}

impl RunReport {
    /// Render the report in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Txt => Ok(self.render_txt()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_txt(&self) -> String {
        let elapsed = self.finished_at - self.started_at;
        let t = &self.transmission;

        let mut out = String::new();
        out.push_str(&format!("Callback:    {}\n", self.callback));
        out.push_str(&format!("Received:    {}\n", t.received));
        out.push_str(&format!("Transmitted: {}\n", t.transmitted));
        out.push_str(&format!("Status:      {}\n", t.status));
        out.push_str(&format!("Swaps:       {}\n", t.swaps));
        out.push_str(&format!(
            "Elapsed:     {} us",
            elapsed.num_microseconds().unwrap_or_default()
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scramble_core::ScrambleStatus;

    fn sample() -> RunReport {
        let now = Utc::now();
        RunReport {
            started_at: now,
            finished_at: now,
            mode: CallbackMode::Ffi,
            callback: "C ABI scramble_swap_callback".to_string(),
            transmission: Transmission::new(
                "the cat in the hat".to_string(),
                "the hat in the cat".to_string(),
                ScrambleStatus::Success,
            ),
        }
    }

    #[test]
    fn test_txt_report() {
        let txt = sample().render(OutputFormat::Txt).unwrap();
        assert!(txt.contains("Transmitted: the hat in the cat"));
        assert!(txt.contains("Swaps:       2"));
        assert!(txt.contains("Elapsed:     0 us"));
    }

    #[test]
    fn test_json_report() {
        let json = sample().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["mode"], "ffi");
        assert_eq!(value["transmission"]["transmitted"], "the hat in the cat");
        assert_eq!(value["transmission"]["status"], "Success");
        assert_eq!(value["transmission"]["swaps"], 2);
    }
}
