//! CLI output formatting

use crate::core::{Pipeline, Step};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");

/// One line per step: ID, image and dependencies
pub fn format_step(step: &Step) -> String {
    if step.wait_for.is_empty() {
        format!("{} {}", style(&step.id).cyan(), style(&step.image).dim())
    } else {
        format!(
            "{} {} ← {}",
            style(&step.id).cyan(),
            style(&step.image).dim(),
            step.wait_for.join(", ")
        )
    }
}

/// Summary printed after validating a pipeline
pub fn format_pipeline_summary(pipeline: &Pipeline) -> String {
    let dependent = pipeline.steps.iter().filter(|s| !s.wait_for.is_empty()).count();
    let mut lines = vec![
        format!("  Steps: {}", style(pipeline.steps.len()).cyan()),
        format!("  With waitFor: {}", style(dependent).cyan()),
    ];
    lines.extend(pipeline.steps.iter().map(|s| format!("    {}", format_step(s))));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_step_lists_dependencies() {
        console::set_colors_enabled(false);
        let step = Step::shell("apply dev", "hashicorp/terraform:1.8", "sh", "true")
            .wait_for("setup and plan dev");
        assert_eq!(
            format_step(&step),
            "apply dev hashicorp/terraform:1.8 ← setup and plan dev"
        );
    }

    #[test]
    fn test_summary_counts_steps() {
        console::set_colors_enabled(false);
        let pipeline = crate::core::build_pipeline(&crate::core::Parameters::default());
        let summary = format_pipeline_summary(&pipeline);
        assert!(summary.contains("Steps: 10"));
        assert!(summary.contains("With waitFor: 3"));
    }
}
