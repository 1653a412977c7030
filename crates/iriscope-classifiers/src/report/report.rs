//! A small HTML report builder: titled sections of markup blocks and
//! inline Plotly charts, rendered into a standalone document with an
//! injected stylesheet.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

const DEFAULT_CSS: &str = "\
body { font-family: sans-serif; margin: 2rem auto; max-width: 60rem; }\n\
.report-section { margin-bottom: 2rem; }\n\
footer { color: #888; font-size: 0.8rem; }\n";

enum Block {
    Content(Markup),
    Plot(Plot),
}

/// A titled block of report content: free-form markup and plots, in
/// insertion order.
pub struct ReportSection {
    heading: String,
    blocks: Vec<Block>,
}

impl ReportSection {
    pub fn new(heading: &str) -> Self {
        ReportSection {
            heading: heading.to_string(),
            blocks: Vec::new(),
        }
    }

    /// Append a block of markup content.
    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(Block::Content(content));
    }

    /// Append an interactive plot, embedded inline in the document.
    pub fn add_plot(&mut self, plot: Plot) {
        self.blocks.push(Block::Plot(plot));
    }
}

/// An HTML report assembled from sections.
pub struct Report {
    app_name: String,
    version: String,
    logo_url: Option<String>,
    title: String,
    css: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(app_name: &str, version: &str, logo_url: Option<&str>, title: &str) -> Self {
        Report {
            app_name: app_name.to_string(),
            version: version.to_string(),
            logo_url: logo_url.map(|url| url.to_string()),
            title: title.to_string(),
            css: DEFAULT_CSS.to_string(),
            sections: Vec::new(),
        }
    }

    /// Replace the default stylesheet injected into the document head.
    pub fn set_css(&mut self, css: &str) {
        self.css = css.to_string();
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    /// Render the full standalone HTML document.
    pub fn render(&self) -> String {
        // Plot div ids must be unique document-wide, so blocks are
        // rendered with a running counter before assembly.
        let mut plot_idx = 0usize;
        let rendered: Vec<(&str, Vec<Markup>)> = self
            .sections
            .iter()
            .map(|section| {
                let blocks = section
                    .blocks
                    .iter()
                    .map(|block| match block {
                        Block::Content(markup) => markup.clone(),
                        Block::Plot(plot) => {
                            let div_id = format!("report-plot-{}", plot_idx);
                            plot_idx += 1;
                            PreEscaped(plot.to_inline_html(Some(&div_id)))
                        }
                    })
                    .collect();
                (section.heading.as_str(), blocks)
            })
            .collect();

        let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let markup = html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style { (PreEscaped(&self.css)) }
                }
                body {
                    div class="header-container" {
                        @if let Some(logo) = &self.logo_url {
                            img class="logo" src=(logo) alt=(self.app_name);
                        }
                        h1 class="main-title" { (self.title) }
                        p class="sub-title" { (self.app_name) " v" (self.version) }
                    }
                    @for (heading, blocks) in &rendered {
                        section class="report-section" {
                            h2 { (heading) }
                            @for block in blocks {
                                (block)
                            }
                        }
                    }
                    footer {
                        p { "Generated by " (self.app_name) " v" (self.version) " on " (generated_at) }
                    }
                }
            }
        };
        markup.into_string()
    }

    /// Write the rendered document to disk.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render())
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        log::info!("report written to {}", path.display());
        Ok(())
    }
}
