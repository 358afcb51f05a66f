//! Command-line front end.
//!
//! Each invocation mirrors the page lifecycle: restore the persisted theme
//! silently, run one interaction, and print whatever notice and link it
//! produced.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use frontdesk::contact::{self, phone, InquiryForm};
use frontdesk::render::site_styles;
use frontdesk::theme::ColorMode;
use frontdesk::{
    logging, FileThemeStore, Notice, NotificationCenter, OutputMode, Page, SiteRenderer,
    ThemeController, ThemeMode, ThemeOutcome,
};

#[derive(Parser)]
#[command(name = "frontdesk", version, about = "Course-center site front end")]
struct Cli {
    /// Output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    output: OutputModeArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputModeArg {
    Auto,
    Term,
    Text,
}

impl From<OutputModeArg> for OutputMode {
    fn from(arg: OutputModeArg) -> Self {
        match arg {
            OutputModeArg::Auto => OutputMode::Auto,
            OutputModeArg::Term => OutputMode::Term,
            OutputModeArg::Text => OutputMode::Text,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Show or change the site theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Validate an enrollment inquiry and print its WhatsApp link
    Enroll {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        course: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Build an inquiry link for a course from the listing
    Inquire { course: String },
    /// Build the join-now link
    Join,
    /// Build the special-offer link
    Offer,
    /// Build a contact link for a phone number shown on the page
    Call { number: String },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Switch to the given theme
    Set {
        /// Theme to activate: system, light, or dark
        mode: String,
    },
    /// Advance to the next theme in the cycle order
    Cycle,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init();

    let mut page = Page::new();
    let store = FileThemeStore::new().context("locating settings")?;
    let mut themes = ThemeController::start(store, &mut page);
    let mut notices = NotificationCenter::new();

    match cli.command {
        Command::Theme { action: None } => {
            let appearance = match themes.appearance() {
                ColorMode::Light => "light",
                ColorMode::Dark => "dark",
            };
            println!("theme: {}", themes.mode());
            println!("appearance: {appearance}");
        }
        Command::Theme {
            action: Some(ThemeAction::Set { mode }),
        } => {
            let mode: ThemeMode = mode.parse()?;
            let outcome = themes.set(mode, &mut page);
            announce_theme_change(outcome, &themes, &mut notices, cli.output)?;
        }
        Command::Theme {
            action: Some(ThemeAction::Cycle),
        } => {
            let outcome = themes.cycle(&mut page);
            announce_theme_change(outcome, &themes, &mut notices, cli.output)?;
        }
        Command::Enroll {
            name,
            phone,
            course,
            message,
        } => {
            let renderer = renderer_for(&themes, cli.output)?;
            let form = InquiryForm {
                name,
                phone,
                course,
                message,
            };
            match form.validate() {
                Err(errors) => {
                    print!("{}", renderer.form_errors(&errors)?);
                    notices.show(Notice::error(errors[0].to_string()), Instant::now());
                    print_visible(&renderer, &notices)?;
                    return Ok(ExitCode::FAILURE);
                }
                Ok(inquiry) => {
                    let text = renderer.enrollment_message(&inquiry)?;
                    let url = contact::contact_link(&text)?;
                    notices.show(
                        Notice::success(
                            "Thank you! Your message has been sent. Redirecting to WhatsApp...",
                        ),
                        Instant::now(),
                    );
                    print_visible(&renderer, &notices)?;
                    println!("{}", renderer.link_line(&url)?);
                }
            }
        }
        Command::Inquire { course } => {
            let renderer = renderer_for(&themes, cli.output)?;
            let text = renderer.course_message(&course)?;
            let url = contact::contact_link(&text)?;
            notices.show(
                Notice::info(format!("Inquiring about {course} course...")),
                Instant::now(),
            );
            print_visible(&renderer, &notices)?;
            println!("{}", renderer.link_line(&url)?);
        }
        Command::Join => {
            let renderer = renderer_for(&themes, cli.output)?;
            let text = renderer.join_message()?;
            let url = contact::contact_link(&text)?;
            notices.show(
                Notice::success("Opening WhatsApp to connect with us!"),
                Instant::now(),
            );
            print_visible(&renderer, &notices)?;
            println!("{}", renderer.link_line(&url)?);
        }
        Command::Offer => {
            let renderer = renderer_for(&themes, cli.output)?;
            let text = renderer.offer_message()?;
            let url = contact::contact_link(&text)?;
            notices.show(
                Notice::success("Opening WhatsApp for special offer details!"),
                Instant::now(),
            );
            print_visible(&renderer, &notices)?;
            println!("{}", renderer.link_line(&url)?);
        }
        Command::Call { number } => {
            let renderer = renderer_for(&themes, cli.output)?;
            let text = renderer.contact_message()?;
            let url = contact::clicked_number_link(&number, &text)?;
            let digits = phone::digits_only(&number);
            notices.show(
                Notice::success(format!("Connecting via WhatsApp to {digits}")),
                Instant::now(),
            );
            print_visible(&renderer, &notices)?;
            println!("{}", renderer.link_line(&url)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Renders the confirmation of a theme change with the palette of the
/// theme just applied. An unchanged outcome prints nothing.
fn announce_theme_change(
    outcome: ThemeOutcome,
    themes: &ThemeController<FileThemeStore>,
    notices: &mut NotificationCenter,
    output: OutputModeArg,
) -> anyhow::Result<()> {
    if let ThemeOutcome::Switched { notice, .. } = outcome {
        let renderer = renderer_for(themes, output)?;
        notices.show(notice, Instant::now());
        print_visible(&renderer, notices)?;
    }
    Ok(())
}

fn renderer_for(
    themes: &ThemeController<FileThemeStore>,
    output: OutputModeArg,
) -> anyhow::Result<SiteRenderer> {
    let styles = site_styles().resolve(themes.appearance()).clone();
    Ok(SiteRenderer::new(styles, output.into())?)
}

fn print_visible(renderer: &SiteRenderer, notices: &NotificationCenter) -> anyhow::Result<()> {
    if let Some(notice) = notices.visible() {
        println!("{}", renderer.notice(notice)?);
    }
    Ok(())
}
