//! Graph command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::GraphOptions;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::{CourseGraphBuilder, GraphRenderer};
use crate::plan::parse_plan_file;

pub struct GraphExecutor;

impl GraphExecutor {
    /// Render the plan at `config.plan` into `output`
    pub fn render(config: &GraphOptions, output: &mut dyn Write) -> Result<()> {
        let plan = parse_plan_file(&config.plan)
            .wrap_err_with(|| format!("Failed to load plan '{}'", config.plan.display()))?;

        let mut graph_builder = CourseGraphBuilder::new();
        graph_builder
            .build_from_schedule(plan.schedule())
            .wrap_err("Failed to build prerequisite graph")?;

        // Detect cycles if highlighting is requested
        let cycles = if config.highlight_cycles {
            let mut detector = CycleDetector::new();
            detector
                .detect_cycles(graph_builder.graph())
                .wrap_err("Failed to detect cycles")?;
            detector.cycles().to_vec()
        } else {
            Vec::new()
        };

        let renderer = GraphRenderer::new(config.highlight_cycles);

        match config.format {
            GraphFormat::Ascii => renderer
                .render_ascii(graph_builder.graph(), &cycles, output)
                .wrap_err("Failed to render ASCII graph"),
            GraphFormat::Mermaid => renderer
                .render_mermaid(graph_builder.graph(), &cycles, output)
                .wrap_err("Failed to render Mermaid graph"),
            GraphFormat::Dot => renderer
                .render_dot(graph_builder.graph(), &cycles, output)
                .wrap_err("Failed to render DOT graph"),
        }
    }
}

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} prerequisite graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        Self::render(&config, output_writer.as_mut())?;
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to write graph")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
