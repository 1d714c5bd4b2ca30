use std::io::{BufRead, Write};
use std::path::PathBuf;

use dockgen_build::{DockerfileGenerator, write_dockerfile};
use dockgen_core::{AppMeta, Platform, TemplateConfig};

use crate::prompt::{DONE_SENTINEL, Prompter};

const LABEL_PROMPT: &str = "Enter a label (e.g. description=..., maintainer=...)";
const SETUP_PROMPT: &str =
    "Enter a command that installs what your application needs (e.g. apt-get install -y vim, npm install)";
const PORT_PROMPT: &str = "Enter a port your application listens on";
const START_PROMPT: &str = "Enter the command that starts your application";

/// How a wizard run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    /// An existing file was found and the user chose to keep it.
    Kept,
}

/// Walks the user through every question and writes the Dockerfile.
pub struct Wizard<R, W> {
    prompter: Prompter<R, W>,
    output_path: PathBuf,
    template: TemplateConfig,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    pub fn new(prompter: Prompter<R, W>, output_path: PathBuf, template: TemplateConfig) -> Self {
        Self {
            prompter,
            output_path,
            template,
            assume_yes: false,
        }
    }

    /// Overwrite an existing file without asking.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        let style = self.prompter.style();
        self.prompter
            .say(&style.banner("Welcome! Let's put your Dockerfile together."))?;

        if self.output_path.exists() && !self.assume_yes && !self.confirm_overwrite()? {
            self.prompter.say("")?;
            self.prompter
                .say(&style.prompt("Keeping the existing Dockerfile untouched."))?;
            return Ok(Outcome::Kept);
        }

        let platform = self.prompt_platform()?;
        let version = self
            .prompter
            .ask("Enter the version of the base image (e.g., 1.0)")?;
        tracing::debug!(%platform, %version, "base image chosen");

        let mut meta = AppMeta::new(platform, version);
        meta.labels = self.collect_step(LABEL_PROMPT)?;
        meta.setup = self.collect_step(SETUP_PROMPT)?;
        meta.ports = self.collect_step(PORT_PROMPT)?;
        meta.start_command = self.prompter.collect_one(START_PROMPT);

        let dockerfile = DockerfileGenerator::new(&meta, &self.template).render();
        write_dockerfile(&self.output_path, &dockerfile)?;

        self.prompter.say("")?;
        self.prompter
            .say(&style.success("Dockerfile generated successfully!"))?;
        Ok(Outcome::Written(self.output_path.clone()))
    }

    /// Only a case-insensitive `y` allows overwriting.
    fn confirm_overwrite(&mut self) -> anyhow::Result<bool> {
        let question = format!(
            "A Dockerfile already exists at {}. Do you want to overwrite it? (y/n)",
            self.output_path.display()
        );
        let answer = self.prompter.ask(&question)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Re-asks until the answer names a supported platform.
    fn prompt_platform(&mut self) -> anyhow::Result<Platform> {
        let style = self.prompter.style();
        let allowed = Platform::allowed_list();
        self.prompter.say("")?;
        self.prompter.say(&style.prompt(&format!(
            "Available application platforms are: {allowed}"
        )))?;

        loop {
            let answer = self
                .prompter
                .ask("Enter the platform your application uses")?;
            match answer.parse::<Platform>() {
                Ok(platform) => return Ok(platform),
                Err(e) => {
                    tracing::debug!(error = %e, "platform rejected");
                    self.prompter.say("")?;
                    self.prompter.say(&style.prompt(&format!(
                        "Please try again. Valid application platforms are: {allowed}"
                    )))?;
                }
            }
        }
    }

    fn collect_step(&mut self, prompt: &str) -> anyhow::Result<Vec<String>> {
        let style = self.prompter.style();
        self.prompter.say("")?;
        self.prompter.say(&style.hint(&format!(
            "This step repeats; type '{DONE_SENTINEL}' when you are finished."
        )))?;
        Ok(self.prompter.collect_many(prompt)?)
    }
}
