// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use grade_compass::{compute_cgpa, CgpaOutcome, CourseRecord};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 && args[1] == "report" {
        // Batch report mode
        run_report(Path::new(&args[2]))?;
    } else if args.len() > 1 && args[1] == "report" {
        eprintln!("Usage: grade-compass report <courses.json>");
        std::process::exit(1);
    } else {
        // UI mode (default)
        run_ui_mode()?;
    }

    Ok(())
}

fn run_report(path: &Path) -> Result<()> {
    println!("📊 CGPA Report - JSON course list → CGPA");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load course list
    println!("\n📂 Loading courses...");
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read course file: {:?}", path))?;
    let courses: Vec<CourseRecord> =
        serde_json::from_str(&content).context("Failed to parse courses JSON")?;
    println!("✓ Loaded {} course(s) from {:?}", courses.len(), path);

    // 2. Validate - zero credits would be an out-of-contract record
    for course in &courses {
        if course.credits == 0 {
            bail!("course {:?} has zero credits", course.name);
        }
    }

    // 3. List courses
    println!("\n📚 Courses:");
    for (i, course) in courses.iter().enumerate() {
        println!(
            "  {}. {} — {} credit(s) — Grade {}",
            i + 1,
            course.name,
            course.credits,
            course.grade
        );
    }

    // 4. Compute CGPA
    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    match compute_cgpa(&courses) {
        CgpaOutcome::Computed { cgpa, incomplete } => {
            println!("🎯 Current CGPA: {:.2}", cgpa);
            if incomplete.is_empty() {
                println!("🔥 All courses completed.");
            } else {
                println!(
                    "📌 {} course(s) incomplete: {}",
                    incomplete.len(),
                    incomplete.join(", ")
                );
            }
        }
        CgpaOutcome::NoCompletedCourses { reason } => {
            println!("❌ No CGPA: {}", reason.message());
        }
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    println!("🎓 Loading Grade Compass UI...\n");
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new();
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or compute a CGPA from a file: grade-compass report <courses.json>");
    std::process::exit(1);
}
