//! Diagnostic and error reporting for clex.
//! clex 的诊断和错误报告。
//!
//! Lexer failures are turned into [`Diagnostic`] records and rendered with
//! ariadne, pointing into the source buffer that was being scanned.
//! 本 crate 使用 ariadne 库渲染词法错误。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, Label};

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};
use std::io;

fn build_report<'a>(
    filename: &'a str,
    diagnostic: &Diagnostic,
    color: bool,
) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, filename, diagnostic.span.start.to_usize())
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let mut ariadne_label =
            AriadneLabel::new((filename, label.span.range())).with_message(&label.message);
        if color {
            ariadne_label = ariadne_label.with_color(colors.next());
        }
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic to stderr.
/// 将诊断信息渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<()> {
    build_report(filename, diagnostic, true).eprint((filename, Source::from(source)))
}

/// Render a diagnostic without colors into a string.
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<String> {
    let mut buf = Vec::new();
    build_report(filename, diagnostic, false).write((filename, Source::from(source)), &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
