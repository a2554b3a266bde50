//! Pipeline orchestrator.

use eyre::{Result, WrapErr};
use passgen_manifest::Tables;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{MungePhase, ValidatePhase},
};
use crate::CommandSource;

/// The generation pipeline orchestrator.
///
/// The pipeline loads the declarations, then runs the built-in phases
/// (validate, munge) followed by any user phases, calling plugin hooks
/// before and after each phase.
pub struct Pipeline {
    tables: Tables,
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new(tables: Tables) -> Self {
        Self {
            tables,
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the built-in validate phase (e.g. to change its lints).
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a command source.
    ///
    /// The source is fully loaded before any phase runs. Then:
    /// 1. ValidatePhase - lints the declarations
    /// 2. MungePhase - builds the command forest
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or any phase fails fatally.
    pub fn run<S>(&self, source: &S) -> Result<CompilationContext>
    where
        S: CommandSource + ?Sized,
    {
        let commands = source
            .load()
            .wrap_err("failed to load command declarations")?;
        tracing::info!(commands = commands.len(), "loaded command declarations");

        self.run_loaded(CompilationContext::new(commands, self.tables.clone()))
    }

    /// Run the phases without stopping at the first fatal error, returning
    /// the context with everything collected so far.
    ///
    /// Used by `check`-style callers that want to report diagnostics rather
    /// than abort.
    pub fn check<S>(&self, source: &S) -> Result<CompilationContext>
    where
        S: CommandSource + ?Sized,
    {
        let commands = source
            .load()
            .wrap_err("failed to load command declarations")?;
        let mut ctx = CompilationContext::new(commands, self.tables.clone());

        for phase in self.builtin_phases().chain(self.phases.iter().map(|p| p.as_ref())) {
            if let Err(err) = self.run_phase(phase, &mut ctx) {
                tracing::debug!(phase = phase.name(), error = %err, "phase failed");
                break;
            }
        }

        Ok(ctx)
    }

    fn run_loaded(&self, mut ctx: CompilationContext) -> Result<CompilationContext> {
        for phase in self.builtin_phases().chain(self.phases.iter().map(|p| p.as_ref())) {
            self.run_phase(phase, &mut ctx)?;
        }
        Ok(ctx)
    }

    fn builtin_phases(&self) -> impl Iterator<Item = &dyn Phase> {
        [&self.validate as &dyn Phase, &MungePhase as &dyn Phase].into_iter()
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Tables::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use passgen_manifest::CommandSpec;

    use super::*;
    use crate::pipeline::TracingPlugin;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn commands() -> Vec<CommandSpec> {
        vec![
            CommandSpec::new("orgs", "orgs", "orgs")
                .with_group("orgs")
                .with_description("List organizations"),
            CommandSpec::new("orgs:create", "create", "orgs create [name]")
                .with_group("orgs")
                .with_description("Create an organization"),
        ]
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::default()
            .run(&commands())
            .expect("pipeline should succeed");

        let forest = ctx.forest.expect("forest should be built");
        assert_eq!(forest.command_count(), 2);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::default().plugin(plugin).plugin(TracingPlugin);
        pipeline.run(&commands()).expect("pipeline should succeed");

        // 2 built-in phases = 2 before + 2 after hooks
        assert_eq!(before_count.load(Ordering::SeqCst), 2);
        assert_eq!(after_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_load_failure_aborts() {
        struct Broken;
        impl CommandSource for Broken {
            fn load(&self) -> Result<Vec<CommandSpec>> {
                eyre::bail!("connection refused")
            }
        }

        let err = Pipeline::default().run(&Broken).unwrap_err();
        assert_eq!(err.to_string(), "failed to load command declarations");
    }

    #[test]
    fn test_validation_error_stops_before_munge() {
        let mut commands = commands();
        commands.push(commands[1].clone());

        assert!(Pipeline::default().run(&commands).is_err());

        let ctx = Pipeline::default().check(&commands).unwrap();
        assert_eq!(ctx.error_count(), 1);
        assert!(ctx.forest.is_none());
    }

    #[test]
    fn test_check_collects_munge_conflicts() {
        let commands = vec![
            CommandSpec::new("teams", "teams", "teams").with_description("Teams"),
            CommandSpec::new("orgs", "orgs", "orgs").with_description("Orgs"),
        ];

        let ctx = Pipeline::default().check(&commands).unwrap();
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.errors().next().unwrap().phase, "munge");
    }
}
