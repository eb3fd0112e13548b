//! Command runners behind the `eruption` subcommands.

use anyhow::{Context, Result};
use eruption_core::{AssessmentForm, CoreConfig, Database, SubmissionHandler};

use crate::cli::{HistoryArgs, SubmitArgs};
use crate::summary::{print_history, print_layout, print_outcome};

pub fn run_layout() -> Result<()> {
    print_layout();
    Ok(())
}

pub fn run_submit(config: &CoreConfig, args: &SubmitArgs) -> Result<()> {
    let mut db = open_db(config)?;

    let mut form = match args.date {
        Some(date) => AssessmentForm::new(date),
        None => AssessmentForm::dated_today(),
    };
    form.set_patient_name(args.name.as_str());
    form.set_patient_id(args.patient_id.as_str());
    form.set_comments(args.comment.as_str());
    for assignment in &args.teeth {
        form.set_tooth_status(assignment.tooth, assignment.status);
    }

    let outcome = SubmissionHandler::new(&mut db)
        .with_persist_mode(config.persist_mode())
        .submit(&form)?;

    // The record is committed at this point; report it before any export error.
    let export = config.export_dir().map(|dir| {
        outcome
            .export
            .write_to_dir(dir)
            .with_context(|| format!("writing export to {}", dir.display()))
    });
    let export_path = match &export {
        Some(Ok(path)) => Some(path.as_path()),
        _ => None,
    };

    if args.json {
        println!("{}", outcome.export.contents);
    } else {
        print_outcome(&outcome, export_path);
    }

    match export {
        Some(Err(error)) => Err(error.context(format!(
            "record #{} saved, export not written",
            outcome.record.patient_record_id
        ))),
        _ => Ok(()),
    }
}

pub fn run_history(config: &CoreConfig, args: &HistoryArgs) -> Result<()> {
    let db = open_db(config)?;
    let records = db.list_patient_records(args.patient_id.as_deref())?;
    print_history(&records);
    Ok(())
}

fn open_db(config: &CoreConfig) -> Result<Database> {
    Database::open(config.database_path())
        .with_context(|| format!("opening database {}", config.database_path().display()))
}
