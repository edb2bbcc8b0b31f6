use anyhow::{bail, Result};
use serde_json::json;

use folio_core::{AppConfig, Portfolio};

pub fn run(config: &AppConfig, portfolio: &Portfolio, active: usize, as_json: bool) -> Result<()> {
    let projects = &portfolio.projects;
    if projects.is_empty() {
        println!("No projects yet.");
        return Ok(());
    }
    if active >= projects.len() {
        bail!("--active {} is out of range (0..{})", active, projects.len());
    }

    let policy = config.carousel.tier_policy()?;
    let len = projects.len();

    if as_json {
        let rows: Vec<_> = projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let placement = policy.tier_of(i, active, len);
                json!({
                    "index": i,
                    "title": project.title,
                    "kind": project.kind,
                    "demo": project.demo,
                    "tier": placement.map(|p| p.tier),
                    "offset": placement.map(|p| p.offset),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Projects ({}), active {}:\n", len, active + 1);
    for (i, project) in projects.iter().enumerate() {
        let placement = match policy.tier_of(i, active, len) {
            Some(p) => format!("{:?} {:+}", p.tier, p.offset),
            None => "hidden".to_string(),
        };
        let marker = if i == active { "*" } else { " " };

        println!(
            "{} {}. {} [{}] ({})",
            marker,
            i + 1,
            project.title,
            project.kind.label(),
            placement
        );
        println!("    Demo: {}", project.demo);
        if !project.technologies.is_empty() {
            println!("    Tech: {}", project.technologies.join(", "));
        }
        println!();
    }

    Ok(())
}
