//! Project name commands for CLI.

use clap::Subcommand;
use dayplan_core::{Config, ProjectId, ProjectNames};

#[derive(Subcommand)]
pub enum ProjectAction {
    /// List project names
    List,
    /// Rename a project
    Rename {
        /// Project id (p1, p2 or p3)
        id: String,
        /// New display name
        name: String,
    },
    /// Restore the default names
    Reset,
}

pub fn run(action: ProjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;

    match action {
        ProjectAction::List => {
            for id in ProjectId::ALL {
                println!("{id}  {}", config.project_names.title(id));
            }
        }
        ProjectAction::Rename { id, name } => {
            let id: ProjectId = id.parse()?;
            if config.project_names.rename(id, &name) {
                config.save()?;
            }
            println!("{id}  {}", config.project_names.title(id));
        }
        ProjectAction::Reset => {
            config.project_names = ProjectNames::default();
            config.save()?;
            println!("project names reset to defaults");
        }
    }
    Ok(())
}
