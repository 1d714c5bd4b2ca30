use dockgen_core::{AppMeta, TemplateConfig};

/// Renders a single-stage Dockerfile from the collected answers.
pub struct DockerfileGenerator<'a> {
    meta: &'a AppMeta,
    template: &'a TemplateConfig,
}

impl<'a> DockerfileGenerator<'a> {
    pub fn new(meta: &'a AppMeta, template: &'a TemplateConfig) -> Self {
        Self { meta, template }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "FROM {base}\n\nWORKDIR {workdir}\n\nCOPY . {workdir}\n\n",
            base = self.meta.base_image(),
            workdir = self.template.workdir,
        );

        out.push_str(&directive_lines("LABEL", &self.meta.labels, "\n\n"));

        // The setup block is always preceded by a blank line, even when empty.
        out.push_str("\n\n");
        out.push_str(&directive_lines("RUN", &self.meta.setup, "\n"));

        if !self.meta.ports.is_empty() {
            out.push_str("\n\n");
            out.push_str(&directive_lines("EXPOSE", &self.meta.ports, "\n"));
        }

        if let Some(cmd) = exec_form("CMD", &self.meta.start_args()) {
            out.push_str("\n\n");
            out.push_str(&cmd);
        }

        if !out.ends_with('\n') {
            out.push('\n');
        }

        tracing::debug!(bytes = out.len(), "rendered dockerfile");
        out
    }
}

/// `<INSTRUCTION> <entry>` per entry, joined by `separator`.
fn directive_lines(instruction: &str, entries: &[String], separator: &str) -> String {
    entries
        .iter()
        .map(|entry| format!("{instruction} {entry}"))
        .collect::<Vec<_>>()
        .join(separator)
}

/// `INSTRUCTION ["a", "b"]`, each argument as a JSON string.
fn exec_form(instruction: &str, args: &[&str]) -> Option<String> {
    if args.is_empty() {
        return None;
    }
    let quoted: Vec<String> = args
        .iter()
        .map(|arg| serde_json::Value::String((*arg).to_owned()).to_string())
        .collect();
    Some(format!("{instruction} [{}]", quoted.join(", ")))
}
