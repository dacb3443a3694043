use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub code: fn(&str) -> String,
    pub error: fn(&str) -> String,
    pub diag: fn(&str) -> String,
    pub hint: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "default" | "" => Self::default_theme(),
            "contrast" => Self::contrast(),
            "plain" => Self::plain(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::default_theme() // Fallback to default
            }
        }
    }

    fn default_theme() -> Self {
        Self {
            title: |s| s.bright_magenta().italic().bold().to_string(),
            code: |s| s.normal().to_string(),
            error: |s| s.red().bold().to_string(),
            diag: |s| s.bright_black().dimmed().to_string(),
            hint: |s| s.cyan().italic().to_string(),
        }
    }

    fn contrast() -> Self {
        Self {
            title: |s| s.blue().bold().underline().to_string(),
            code: |s| s.bright_white().to_string(),
            error: |s| s.bright_red().bold().underline().to_string(),
            diag: |s| s.yellow().to_string(),
            hint: |s| s.green().italic().to_string(),
        }
    }

    fn plain() -> Self {
        Self {
            title: |s| s.to_string(),
            code: |s| s.to_string(),
            error: |s| s.to_string(),
            diag: |s| s.to_string(),
            hint: |s| s.to_string(),
        }
    }
}
