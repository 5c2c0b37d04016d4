//! Terminal rendering for the resource views.

use chrono::{DateTime, Utc};
use colored::Colorize;
use gigboard_core::job::{Job, SortOrder};
use gigboard_core::session::Session;
use gigboard_core::task::AcceptedTask;

/// Relative wording for a posted date: Today / Yesterday / "N days ago"
/// under a week, calendar date otherwise.
pub fn relative_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now.date_naive() - date.date_naive()).num_days();
    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        _ => date.format("%b %e, %Y").to_string(),
    }
}

pub fn placeholder() {
    println!("{}", "Resolving session...".bright_black());
}

pub fn not_found() {
    println!("{}", "Job not found.".red());
    println!(
        "{}",
        "It may have been deleted. Use 'jobs' to go back to the listing.".bright_black()
    );
}

pub fn latest_jobs(jobs: &[Job]) {
    println!("{}", "=== Latest jobs ===".bright_magenta().bold());
    if jobs.is_empty() {
        println!("{}", "No jobs posted yet.".bright_black());
        return;
    }
    let now = Utc::now();
    for job in jobs {
        println!(
            "  {}  {}  {}  {}",
            job.id.bright_black(),
            job.title.bold(),
            job.category.cyan(),
            relative_date(job.posted_date, now).bright_black()
        );
    }
}

pub fn jobs_list(jobs: &[Job], sort: SortOrder) {
    println!(
        "{} {}",
        "=== All jobs ===".bright_magenta().bold(),
        format!("(sorted by {})", sort).bright_black()
    );
    if jobs.is_empty() {
        println!("{}", "No jobs posted yet.".bright_black());
        return;
    }
    for job in jobs {
        println!(
            "  {}  {}  {}  {}",
            job.id.bright_black(),
            job.title.bold(),
            job.category.cyan(),
            job.posted_date.format("%b %e, %Y").to_string().bright_black()
        );
    }
    println!(
        "{}",
        "Use 'job <id>' for details, 'sort' to flip the order.".bright_black()
    );
}

pub fn job_detail(job: &Job, viewer_owns: bool) {
    println!("{}", job.title.bold().bright_white());
    println!("  {} {}", "Category:".bright_black(), job.category.cyan());
    println!(
        "  {} {} ({})",
        "Posted by:".bright_black(),
        job.posted_by,
        job.owner_email
    );
    println!(
        "  {} {}",
        "Posted:".bright_black(),
        job.posted_date.format("%b %e, %Y")
    );
    println!("  {} {}", "Cover:".bright_black(), job.cover_image);
    println!();
    println!("  {}", job.summary);
    println!();
    if viewer_owns {
        println!(
            "{}",
            "You posted this job, so it cannot be accepted from here.".yellow()
        );
    } else {
        println!("{}", "Use 'accept' to take this job.".bright_black());
    }
}

pub fn my_jobs(jobs: &[Job]) {
    println!("{}", "=== My posted jobs ===".bright_magenta().bold());
    if jobs.is_empty() {
        println!("{}", "You have not posted any jobs.".bright_black());
        return;
    }
    for job in jobs {
        println!(
            "  {}  {}  {}",
            job.id.bright_black(),
            job.title.bold(),
            job.category.cyan()
        );
    }
    println!(
        "{}",
        "Use 'edit <id>' to update or 'delete <id>' to remove a job.".bright_black()
    );
}

pub fn accepted_tasks(tasks: &[AcceptedTask]) {
    println!("{}", "=== Accepted tasks ===".bright_magenta().bold());
    if tasks.is_empty() {
        println!("{}", "You have not accepted any tasks.".bright_black());
        return;
    }
    for task in tasks {
        println!(
            "  {}  {}  {}  {} {}",
            task.id.bright_black(),
            task.job_title.bold(),
            task.job_category.cyan(),
            "posted by".bright_black(),
            task.posted_by
        );
    }
    println!(
        "{}",
        "Use 'done <id>' or 'cancel <id>' to clear a task.".bright_black()
    );
}

pub fn whoami(session: &Session) {
    if session.is_loading() {
        placeholder();
        return;
    }
    match session.user() {
        Some(user) => {
            println!(
                "{} {} ({})",
                "Signed in as".green(),
                user.display_name.bold(),
                user.email
            );
        }
        None => println!("{}", "Not signed in.".bright_black()),
    }
}
