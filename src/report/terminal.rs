use super::model::{
    CheckReport, ConstraintReport, DesugarReport, ManifestsReport, PluralsReport, Report, SymbolKind,
};
use colored::Colorize;
use miette::Result;

/// Terminal reporter with colored output
pub struct TerminalReporter {
    /// Show serialized forms and descriptors
    show_details: bool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { show_details: true }
    }

    pub fn with_details(mut self, show: bool) -> Self {
        self.show_details = show;
        self
    }

    pub fn report(&self, report: &Report) -> Result<()> {
        match report {
            Report::Constraint(r) => self.print_constraint(r),
            Report::Check(r) => self.print_check(r),
            Report::Plurals(r) => self.print_plurals(r),
            Report::Desugar(r) => self.print_desugar(r),
            Report::Manifests(r) => self.print_manifests(r),
        }
        Ok(())
    }

    fn print_constraint(&self, report: &ConstraintReport) {
        println!("{}", report.rendered.bold());
        if report.sdks.len() > 1 {
            for sdk in &report.sdks {
                let name = sdk.name.clone().unwrap_or_else(|| format!("SDK {}", sdk.sdk_id));
                println!("  {} {}: {}", "→".dimmed(), name.cyan(), sdk.constraint);
            }
        }
        if self.show_details {
            println!();
            println!("  {} {}", "serialized:".dimmed(), report.serialized);
            println!("  {} {}", "descriptor:".dimmed(), report.descriptor);
            println!(
                "  {} {}  {} {}",
                "min:".dimmed(),
                report.min_api,
                "max:".dimmed(),
                report.max_api
            );
        }
    }

    fn print_check(&self, report: &CheckReport) {
        println!("  {} {}", "have:".dimmed(), report.have);
        println!("  {} {}", "need:".dimmed(), report.need);
        println!();
        if report.satisfied {
            println!("{}", "✓ Requirement satisfied".green().bold());
        } else {
            println!("{}", "✗ Requirement not satisfied".red().bold());
            if let Some(missing) = &report.first_missing {
                println!("  {} {}", "missing:".dimmed(), missing.yellow());
            }
        }
    }

    fn print_plurals(&self, report: &PluralsReport) {
        if !report.known {
            println!(
                "{}",
                format!("No plural rules known for {}", report.locale).yellow().bold()
            );
            return;
        }

        println!(
            "{} {}",
            report.language.cyan().bold(),
            format!("({})", report.locale).dimmed()
        );
        if report.quantities.is_empty() {
            println!("  {}", "Only \"other\" is used".dimmed());
            return;
        }
        for entry in &report.quantities {
            let flag = if entry.multiple_values {
                " [several numbers]".yellow().to_string()
            } else {
                String::new()
            };
            match entry.examples {
                Some(examples) => println!(
                    "  {:<6} {}{}",
                    entry.quantity.to_string().bold(),
                    examples.dimmed(),
                    flag
                ),
                None => println!("  {}{}", entry.quantity.to_string().bold(), flag),
            }
        }
    }

    fn print_desugar(&self, report: &DesugarReport) {
        let symbol = match (report.symbol, &report.name, &report.desc) {
            (SymbolKind::Method, Some(name), Some(desc)) => format!("{}#{}{}", report.owner, name, desc),
            (_, Some(name), _) => format!("{}#{}", report.owner, name),
            _ => report.owner.clone(),
        };
        let kind = match report.symbol {
            SymbolKind::Class => "class",
            SymbolKind::Field => "field",
            SymbolKind::Method => "method",
        };

        if report.desugared {
            println!("{} {} {}", "✓".green().bold(), kind.dimmed(), symbol.green());
            println!("  {}", "is desugared".green());
        } else {
            println!("{} {} {}", "✗".red().bold(), kind.dimmed(), symbol.white());
            println!("  {}", "is not desugared".red());
            if report.can_be_desugared_later {
                println!(
                    "  {}",
                    "Library desugaring in a consuming module may still cover it".yellow()
                );
            }
        }
        if self.show_details {
            println!(
                "  {}",
                format!("({} descriptors, {:?})", report.descriptor_count, report.source_set).dimmed()
            );
        }
    }

    fn print_manifests(&self, report: &ManifestsReport) {
        if report.manifests.is_empty() && report.errors.is_empty() {
            println!(
                "{}",
                format!("No manifests found in {}", report.root.display()).yellow().bold()
            );
            return;
        }

        println!();
        println!(
            "{}",
            format!("Found {} manifests:", report.manifests.len()).bold()
        );
        println!();

        for entry in &report.manifests {
            println!(
                "{} {}",
                entry.path.display().to_string().cyan().bold(),
                format!("[{}]", entry.kind).dimmed()
            );
            if let Some(package) = &entry.package {
                println!("  {} {}", "package:".dimmed(), package);
            }
            match &entry.requirement {
                Some(requirement) => println!("  {} {}", "requires:".dimmed(), requirement.green()),
                None => println!("  {}", "no minSdkVersion declared".yellow()),
            }
            if let Some(target) = &entry.target_sdk_version {
                println!("  {} {}", "targetSdkVersion:".dimmed(), target);
            }
            if self.show_details {
                if let Some(serialized) = &entry.serialized {
                    println!("  {} {}", "serialized:".dimmed(), serialized.dimmed());
                }
            }
            println!();
        }

        if !report.errors.is_empty() {
            println!("{}", "─".repeat(60).dimmed());
            for error in &report.errors {
                println!("{} {}", "error:".red().bold(), error);
            }
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
