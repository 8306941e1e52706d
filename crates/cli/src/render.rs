//! Plain-text output.

use chrono::NaiveDate;
use skillstack_core::{Category, Certification, ResourceDetail, Skill};
use skillstack_progress::DEFAULT_DATE_FORMAT;
use skillstack_views::DashboardData;

pub fn dashboard(data: &DashboardData) {
    let stats = &data.stats;
    println!("SkillStack Dashboard ({})", data.reference_date);
    println!("  Skills:          {}", stats.total_skills);
    println!("  Resources:       {}", stats.total_resources);
    println!("  Certifications:  {}", stats.total_certifications);
    println!(
        "  Completed:       {} ({:.1}%)",
        stats.completed_resources, stats.completion_rate
    );

    if !stats.resources_by_platform.is_empty() {
        println!();
        println!("Resources by platform");
        for entry in &stats.resources_by_platform {
            println!(
                "  {:<18} {:>4}  {:>5.1}%",
                entry.platform.display_name(),
                entry.count,
                entry.share_of(stats.total_resources)
            );
        }
    }

    println!();
    println!("Skills Breakdown & Predictions");
    if data.rows.is_empty() {
        println!("  No skills yet");
    } else {
        println!(
            "  {:<24} {:>9} {:>6} {:>9} {:>8}  {:<17} {}",
            "Skill", "Resources", "Active", "Completed", "Activity", "Predicted Mastery", "Status"
        );
        for row in &data.rows {
            println!(
                "  {:<24} {:>9} {:>6} {:>9} {:>7}%  {:<17} {}",
                row.name,
                row.resource_count,
                row.active_count,
                row.completed_count,
                row.activity_percent,
                row.prediction_label(DEFAULT_DATE_FORMAT),
                row.status
            );
        }
    }

    let recs = &data.recommendations;
    if !recs.is_empty() {
        println!();
        println!("Recommended");
        for skill in &recs.skills {
            println!("  skill     {} - {}", skill.id, skill.name);
        }
        for resource in &recs.resources {
            println!(
                "  resource  {} - {} ({})",
                resource.resource.id, resource.resource.title, resource.skill_name
            );
        }
    }
}

pub fn skills(skills: &[Skill]) {
    println!("Skills ({})", skills.len());
    for skill in skills {
        println!(
            "  {} | {} | {} | {:.1}h",
            skill.id,
            skill.name,
            skill.difficulty_level.as_str(),
            skill.target_hours
        );
    }
}

pub fn resources(resources: &[ResourceDetail]) {
    println!("Resources ({})", resources.len());
    for detail in resources {
        let r = &detail.resource;
        println!(
            "  {} | {} | {} | {} | {} | {}",
            r.id,
            r.title,
            detail.skill_name,
            r.platform.display_name(),
            r.resource_type.as_str(),
            detail.status().label()
        );
    }
}

pub fn resource_detail(detail: &ResourceDetail) {
    let r = &detail.resource;
    println!("Resource: {} - {}", r.id, r.title);
    println!("  Skill: {}", detail.skill_name);
    println!("  Status: {}", detail.status().label());
    if let Some(progress) = &detail.progress {
        println!("  Hours: {:.1}", progress.hours_spent);
        if let Some(rating) = progress.difficulty_rating {
            println!("  Difficulty: {rating}/5");
        }
        if let Some(notes) = &progress.notes {
            println!("  Notes: {notes}");
        }
        if let Some(summary) = &progress.summary {
            println!("  Summary: {summary}");
        }
        for point in &progress.key_points {
            println!("    - {point}");
        }
    }
}

pub fn categories(categories: &[Category]) {
    println!("Categories ({})", categories.len());
    for category in categories {
        match &category.description {
            Some(description) => println!("  {} | {} | {}", category.id, category.name, description),
            None => println!("  {} | {}", category.id, category.name),
        }
    }
}

pub fn certifications(certs: &[Certification], today: NaiveDate) {
    println!("Certifications ({})", certs.len());
    for cert in certs {
        let expiry = match cert.expiration_date {
            Some(_) if cert.is_expired(today) => "expired".to_string(),
            Some(date) => format!("expires {date}"),
            None => "no expiration".to_string(),
        };
        println!(
            "  {} | {} | {} | issued {} | {}",
            cert.id, cert.name, cert.issuing_organization, cert.issue_date, expiry
        );
    }
}
