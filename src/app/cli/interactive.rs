//! Interactive form session.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::api::{self, LocalContext};
use crate::app::session::PromptSession;
use crate::domain::{AppError, AspectRatio, CopyFeedback, Lighting, Mood, Style};

const NONE_OPTION: &str = "-- none --";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Subject,
    Action,
    Environment,
    Style,
    Lighting,
    Mood,
    Camera,
    AspectRatio,
    AttachImage,
    RemoveImage,
    Generate,
    Copy,
    Download,
    Reset,
    Quit,
}

pub(super) fn run_interactive(config: Option<&Path>) -> Result<(), AppError> {
    let mut ctx = api::create_context(std::env::current_dir()?, config)?;
    let mut session = PromptSession::default()
        .with_copy_feedback(CopyFeedback::new(ctx.config().copy_confirmation()));

    println!("✨ Photo Prompt Generator");

    loop {
        let entries = menu_entries(&session, Instant::now());
        let labels: Vec<&str> = entries.iter().map(|(label, _)| label.as_str()).collect();

        let selection = Select::new()
            .with_prompt("Choose a field or action")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|err| AppError::Interaction(format!("Failed to read selection: {}", err)))?;

        let Some(index) = selection else {
            return Ok(());
        };
        let action = entries[index].1;
        if action == MenuAction::Quit {
            return Ok(());
        }

        if let Err(err) = apply(action, &mut ctx, &mut session) {
            if !is_recoverable(&err) {
                return Err(err);
            }
            eprintln!("⚠️  {}", err);
        }
    }
}

/// Errors the menu reports before continuing. Anything else ends the session.
fn is_recoverable(err: &AppError) -> bool {
    err.is_validation() || matches!(err, AppError::ClipboardError(_) | AppError::Io(_))
}

fn apply(
    action: MenuAction,
    ctx: &mut LocalContext,
    session: &mut PromptSession,
) -> Result<(), AppError> {
    let form = &mut session.form;
    match action {
        MenuAction::Subject => edit_text("Subject *", &mut form.subject)?,
        MenuAction::Action => edit_text("Action / expression", &mut form.action)?,
        MenuAction::Environment => edit_text("Environment / setting", &mut form.environment)?,
        MenuAction::Camera => edit_text("Camera details", &mut form.camera_details)?,
        MenuAction::Style => {
            let labels: Vec<&str> = Style::ALL.iter().map(Style::as_str).collect();
            let current = Style::ALL.iter().position(|s| *s == form.style);
            if let Some(index) = select("Art style", &labels, current)? {
                form.style = Style::ALL[index];
            }
        }
        MenuAction::Lighting => {
            let labels: Vec<&str> = Lighting::ALL.iter().map(Lighting::as_str).collect();
            let current = form.lighting.and_then(|l| Lighting::ALL.iter().position(|x| *x == l));
            if let Some(choice) = select_optional("Lighting", &labels, current)? {
                form.lighting = choice.map(|index| Lighting::ALL[index]);
            }
        }
        MenuAction::Mood => {
            let labels: Vec<&str> = Mood::ALL.iter().map(Mood::as_str).collect();
            let current = form.mood.and_then(|m| Mood::ALL.iter().position(|x| *x == m));
            if let Some(choice) = select_optional("Mood", &labels, current)? {
                form.mood = choice.map(|index| Mood::ALL[index]);
            }
        }
        MenuAction::AspectRatio => {
            let labels: Vec<String> = AspectRatio::ALL.iter().map(|r| r.display_label()).collect();
            let current = AspectRatio::ALL.iter().position(|r| *r == form.aspect_ratio);
            if let Some(index) = select("Aspect ratio", &labels, current)? {
                form.aspect_ratio = AspectRatio::ALL[index];
            }
        }
        MenuAction::AttachImage => {
            if let Some(path) = prompt_path("Reference image path (max 5MB)")? {
                let path = ctx.resolve(&path);
                let image = session.attach_image(&path, ctx.files())?;
                println!("📄 File: {} ({})", image.file_name, image.display_size());
            }
        }
        MenuAction::RemoveImage => {
            if let Some(image) = session.remove_image() {
                println!("Removed {}", image.file_name);
            }
        }
        MenuAction::Generate => {
            let prompt = session.generate(ctx.renderer())?;
            println!("\n📝 {}\n", prompt);
        }
        MenuAction::Copy => {
            if session.copy(ctx.clipboard_mut(), Instant::now())? {
                println!("✓ Copied!");
            }
        }
        MenuAction::Download => {
            let dir = ctx.export_dir(None);
            if let Some(path) = session.download(ctx.files(), &dir)? {
                println!("✅ Saved prompt to {}", path.display());
            }
        }
        MenuAction::Reset => {
            session.reset();
            println!("Form reset");
        }
        MenuAction::Quit => {}
    }
    Ok(())
}

/// Menu rows for the current session state. Output actions appear only once a prompt exists.
fn menu_entries(session: &PromptSession, now: Instant) -> Vec<(String, MenuAction)> {
    let form = &session.form;
    let mut entries = vec![
        (field_label("Subject *", &form.subject), MenuAction::Subject),
        (field_label("Action", &form.action), MenuAction::Action),
        (field_label("Environment", &form.environment), MenuAction::Environment),
        (field_label("Style", form.style.as_str()), MenuAction::Style),
        (
            field_label("Lighting", form.lighting.map(|l| l.as_str()).unwrap_or("")),
            MenuAction::Lighting,
        ),
        (field_label("Mood", form.mood.map(|m| m.as_str()).unwrap_or("")), MenuAction::Mood),
        (field_label("Camera details", &form.camera_details), MenuAction::Camera),
        (field_label("Aspect ratio", &form.aspect_ratio.display_label()), MenuAction::AspectRatio),
    ];

    let image_entry = match session.image() {
        Some(image) => {
            (format!("Remove reference image ({})", image.file_name), MenuAction::RemoveImage)
        }
        None => ("Attach reference image".to_string(), MenuAction::AttachImage),
    };
    entries.push(image_entry);

    entries.push(("✨ Generate prompt".to_string(), MenuAction::Generate));
    if session.generated_prompt().is_some() {
        let copy_label = if session.is_copied(now) { "✓ Copied!" } else { "Copy prompt" };
        entries.push((copy_label.to_string(), MenuAction::Copy));
        entries.push(("Download TXT".to_string(), MenuAction::Download));
    }
    entries.push(("Reset".to_string(), MenuAction::Reset));
    entries.push(("Quit".to_string(), MenuAction::Quit));
    entries
}

fn field_label(name: &str, value: &str) -> String {
    if value.trim().is_empty() { format!("{name}: -") } else { format!("{name}: {value}") }
}

fn edit_text(prompt: &str, value: &mut String) -> Result<(), AppError> {
    let result = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(value.as_str())
        .allow_empty(true)
        .interact_text();

    match result {
        Ok(text) => {
            *value = text;
            Ok(())
        }
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(()),
        Err(err) => Err(AppError::Interaction(format!("Failed to read {}: {}", prompt, err))),
    }
}

fn prompt_path(prompt: &str) -> Result<Option<PathBuf>, AppError> {
    match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(PathBuf::from(value.trim()))),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Interaction(format!("Failed to read path: {}", err))),
    }
}

fn select<T: ToString>(
    prompt: &str,
    items: &[T],
    current: Option<usize>,
) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(current.unwrap_or(0))
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select {}: {}", prompt, err)))
}

/// Select with a leading "none" row. `Some(None)` clears the value; `None` means cancelled.
fn select_optional(
    prompt: &str,
    labels: &[&str],
    current: Option<usize>,
) -> Result<Option<Option<usize>>, AppError> {
    let mut items = vec![NONE_OPTION];
    items.extend_from_slice(labels);

    let selection = select(prompt, &items, Some(current.map_or(0, |index| index + 1)))?;
    Ok(selection.map(|index| index.checked_sub(1)))
}
