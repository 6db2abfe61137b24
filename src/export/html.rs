//! Print-ready HTML rendering of a projected resume
//!
//! The page is self-contained: inline stylesheet, no external assets, no
//! script unless auto-print is on. Markup mirrors the on-screen preview
//! section for section, so the printout matches what the user saw.

use std::fmt::{self, Write};

use crate::core::config::ExportConfig;
use crate::core::preview::{PreviewHeader, ResumePreview, Section};

/// Stylesheet for the print page.
const PRINT_STYLES: &str = r#"body { font-family: Arial, sans-serif; margin: 0; padding: 20px; background: white; }
.cv-preview { max-width: 800px; margin: 0 auto; }
.header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; border-radius: 10px; margin-bottom: 20px; }
.section { margin-bottom: 25px; }
.section-title { font-size: 18px; font-weight: bold; color: #333; border-bottom: 2px solid #667eea; padding-bottom: 5px; margin-bottom: 15px; }
.experience-item, .education-item { margin-bottom: 15px; padding: 15px; border-left: 3px solid #667eea; background: #f8f9ff; }
.skill-tag { display: inline-block; background: #667eea; color: white; padding: 5px 12px; border-radius: 20px; margin: 3px; font-size: 12px; }
.contact-info { display: flex; flex-wrap: wrap; gap: 20px; margin-top: 10px; }
.contact-item { display: flex; align-items: center; gap: 5px; }"#;

/// How the generated page behaves once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Open the browser's print dialog after the load event.
    pub auto_print: bool,
    /// Delay before the dialog opens, giving the page time to lay out.
    pub delay_ms: u64,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            auto_print: true,
            delay_ms: 250,
        }
    }
}

impl From<&ExportConfig> for PrintOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            auto_print: config.auto_print,
            delay_ms: config.print_delay_ms,
        }
    }
}

/// Render the complete print page for a projected resume.
///
/// The page title uses the name exactly as typed, while the visible
/// heading carries the placeholder fallback the preview shows.
pub fn render_page(preview: &ResumePreview, options: &PrintOptions) -> String {
    let mut body = String::new();
    // fmt::Write on a String is infallible
    let _ = write_body(&mut body, preview);

    let script = if options.auto_print {
        format!(
            "<script>window.addEventListener('load', function () {{ \
             setTimeout(function () {{ window.print(); window.close(); }}, {}); \
             }});</script>\n",
            options.delay_ms
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>CV - {title}</title>
<style>{styles}</style>
</head>
<body>
<div class="cv-preview">
{body}</div>
{script}</body>
</html>
"#,
        title = escape_html(&preview.header.raw_name),
        styles = PRINT_STYLES,
        body = body,
        script = script,
    )
}

fn write_body(out: &mut String, preview: &ResumePreview) -> fmt::Result {
    header_html(out, &preview.header)?;
    for section in &preview.sections {
        section_html(out, section)?;
    }
    Ok(())
}

fn header_html(out: &mut String, header: &PreviewHeader) -> fmt::Result {
    writeln!(out, "<div class=\"header\">")?;
    writeln!(out, "<h1>{}</h1>", escape_html(&header.name))?;
    if !header.contacts.is_empty() {
        writeln!(out, "<div class=\"contact-info\">")?;
        for contact in &header.contacts {
            writeln!(
                out,
                "<div class=\"contact-item\">{} {}</div>",
                contact.kind.icon(),
                escape_html(&contact.value)
            )?;
        }
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")
}

fn section_html(out: &mut String, section: &Section) -> fmt::Result {
    writeln!(out, "<div class=\"section\">")?;
    writeln!(out, "<h2 class=\"section-title\">{}</h2>", section.title())?;

    match section {
        Section::Summary(text) => {
            writeln!(out, "<p>{}</p>", escape_html(text))?;
        }
        Section::Experience(entries) => {
            for entry in entries {
                writeln!(out, "<div class=\"experience-item\">")?;
                if !entry.position.is_empty() {
                    writeln!(out, "<h3>{}</h3>", escape_html(&entry.position))?;
                }
                if !entry.company.is_empty() {
                    writeln!(out, "<p class=\"company\">{}</p>", escape_html(&entry.company))?;
                }
                if !entry.duration.is_empty() {
                    writeln!(
                        out,
                        "<span class=\"duration\">{}</span>",
                        escape_html(&entry.duration)
                    )?;
                }
                if !entry.description.is_empty() {
                    writeln!(out, "<p>{}</p>", escape_html(&entry.description))?;
                }
                writeln!(out, "</div>")?;
            }
        }
        Section::Education(entries) => {
            for entry in entries {
                writeln!(out, "<div class=\"education-item\">")?;
                if !entry.degree.is_empty() {
                    writeln!(out, "<h3>{}</h3>", escape_html(&entry.degree))?;
                }
                if !entry.institution.is_empty() {
                    writeln!(
                        out,
                        "<p class=\"institution\">{}</p>",
                        escape_html(&entry.institution)
                    )?;
                }
                if !entry.year.is_empty() {
                    writeln!(out, "<div>{}</div>", escape_html(&entry.year))?;
                }
                if !entry.gpa.is_empty() {
                    writeln!(out, "<div>GPA: {}</div>", escape_html(&entry.gpa))?;
                }
                writeln!(out, "</div>")?;
            }
        }
        Section::Skills(skills) => {
            for skill in skills {
                writeln!(out, "<span class=\"skill-tag\">{}</span>", escape_html(skill))?;
            }
        }
        Section::Achievements(items) => {
            writeln!(out, "<ul>")?;
            for item in items {
                writeln!(out, "<li>\u{1F3C6} {}</li>", escape_html(item))?;
            }
            writeln!(out, "</ul>")?;
        }
    }

    writeln!(out, "</div>")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cv::{CvData, ExperienceField, PersonalField};
    use pretty_assertions::assert_eq;

    fn no_print() -> PrintOptions {
        PrintOptions {
            auto_print: false,
            delay_ms: 0,
        }
    }

    #[test]
    fn test_title_uses_name_as_typed() {
        let mut cv = CvData::default();
        cv.update_personal(PersonalField::FullName, "Ada Lovelace");

        let page = render_page(&ResumePreview::project(&cv), &no_print());
        assert!(page.contains("<title>CV - Ada Lovelace</title>"));
    }

    #[test]
    fn test_blank_name_keeps_title_empty_but_heading_falls_back() {
        let page = render_page(&ResumePreview::project(&CvData::default()), &no_print());
        assert!(page.contains("<title>CV - </title>"));
        assert!(page.contains("<h1>Your Name</h1>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut cv = CvData::default();
        cv.add_skill("<script>alert(\"pwned\")</script>");

        let page = render_page(&ResumePreview::project(&cv), &no_print());
        assert!(page.contains("&lt;script&gt;alert(&quot;pwned&quot;)&lt;/script&gt;"));
        assert!(!page.contains("<script>alert"));
    }

    #[test]
    fn test_hidden_sections_are_absent() {
        let mut cv = CvData::default();
        cv.add_skill("Rust");

        let page = render_page(&ResumePreview::project(&cv), &no_print());
        assert!(page.contains("Skills"));
        assert!(!page.contains("Professional Experience"));
        assert!(!page.contains("Professional Summary"));
    }

    #[test]
    fn test_invisible_entries_are_filtered() {
        let mut cv = CvData::default();
        cv.add_experience();
        cv.update_experience(0, ExperienceField::Company, "Initech");

        let page = render_page(&ResumePreview::project(&cv), &no_print());
        assert_eq!(page.matches("class=\"experience-item\"").count(), 1);
    }

    #[test]
    fn test_auto_print_script_carries_configured_delay() {
        let options = PrintOptions {
            auto_print: true,
            delay_ms: 400,
        };
        let page = render_page(&ResumePreview::project(&CvData::default()), &options);
        assert!(page.contains("window.print()"));
        assert!(page.contains(", 400)"));
    }

    #[test]
    fn test_no_script_without_auto_print() {
        let page = render_page(&ResumePreview::project(&CvData::default()), &no_print());
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_stylesheet_is_embedded() {
        let page = render_page(&ResumePreview::project(&CvData::default()), &no_print());
        assert!(page.contains(".cv-preview { max-width: 800px; margin: 0 auto; }"));
        assert!(page.contains("linear-gradient(135deg, #667eea 0%, #764ba2 100%)"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut cv = CvData::default();
        cv.update_personal(PersonalField::FullName, "Ada");
        cv.update_personal(PersonalField::Summary, "Writes programs before computers exist.");
        cv.add_skill("Mathematics");

        let preview = ResumePreview::project(&cv);
        let options = PrintOptions::default();
        assert_eq!(render_page(&preview, &options), render_page(&preview, &options));
    }

    #[test]
    fn test_print_options_from_export_config() {
        let config = ExportConfig::default();
        let options = PrintOptions::from(&config);
        assert_eq!(
            options,
            PrintOptions {
                auto_print: true,
                delay_ms: 250,
            }
        );
    }

    #[test]
    fn test_escape_html_covers_markup_characters() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<i>\"q\"</i>"), "&lt;i&gt;&quot;q&quot;&lt;/i&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
