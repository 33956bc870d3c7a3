use crate::areas::settings::{Settings, SettingsStore};
use std::io::Write;
use tracing::info;

impl SettingsStore {
    /// Persists the values currently in effect; never touches a repository.
    pub fn save_settings(
        &self,
        settings: &Settings,
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        self.save(settings)?;
        info!(path = %self.path().display(), "settings saved");

        writeln!(writer, "Settings saved to {}", self.path().display())?;
        writeln!(writer, "{settings}")?;

        Ok(())
    }

    pub fn show_settings(&self, settings: &Settings, writer: &mut dyn Write) -> anyhow::Result<()> {
        let origin = if self.path().exists() {
            "file"
        } else {
            "defaults"
        };
        writeln!(writer, "# {} ({origin})", self.path().display())?;
        writeln!(writer, "{settings}")?;

        Ok(())
    }
}
