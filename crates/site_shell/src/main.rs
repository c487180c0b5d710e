use std::fmt::Write as _;
use std::sync::Arc;
use std::{env, fs, path::Path};

use anyhow::{Context, Result, bail};
use config::{ConfigStore, SiteConfig};
use core_types::{
    DocumentMarkers, EnvironmentSignals, LayoutMode, Router, SectionId, Translations,
};
use i18n::I18n;
use navigation::{HistoryRouter, NavigationController, NavigationView, PointerTarget};
use preferences::{
    InMemoryDocument, PreferenceDefaults, Preferences, language_switch_label, theme_toggle,
};
use routes::RouteRegistry;
use storage_local::LocalStorage;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Environment signals read from the process on every query, so a changed
/// variable is seen by `Preferences::apply_environment`.
struct ProcessEnvironment;

impl EnvironmentSignals for ProcessEnvironment {
    fn preferred_locale(&self) -> Option<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .into_iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
    }

    fn prefers_dark_scheme(&self) -> Option<bool> {
        match env::var("FORKIT_COLOR_SCHEME").ok()?.as_str() {
            "dark" => Some(true),
            "light" => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Goto(String),
    Back,
    Forward,
    Open(SectionId, LayoutMode),
    Drawer,
    ClickOutside,
    ClickInside,
    Scroll(f32),
    ToggleLanguage,
    ToggleTheme,
    Render,
}

fn parse_commands(args: &[String]) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let command = match arg.as_str() {
            "goto" => Command::Goto(iter.next().context("goto needs a path")?.clone()),
            "back" => Command::Back,
            "forward" => Command::Forward,
            "open" | "open-mobile" => {
                let name = iter.next().context("open needs a section")?;
                let mode = if arg == "open" {
                    LayoutMode::Desktop
                } else {
                    LayoutMode::Mobile
                };
                Command::Open(parse_section(name)?, mode)
            }
            "drawer" => Command::Drawer,
            "click-outside" => Command::ClickOutside,
            "click-inside" => Command::ClickInside,
            "scroll" => {
                let raw = iter.next().context("scroll needs an offset")?;
                Command::Scroll(raw.parse().with_context(|| format!("bad offset `{raw}`"))?)
            }
            "toggle-language" => Command::ToggleLanguage,
            "toggle-theme" => Command::ToggleTheme,
            "render" => Command::Render,
            other => bail!("unknown command `{other}`"),
        };
        commands.push(command);
    }
    if commands.last() != Some(&Command::Render) {
        commands.push(Command::Render);
    }
    Ok(commands)
}

fn parse_section(name: &str) -> Result<SectionId> {
    Ok(match name {
        "main" => SectionId::Main,
        "offering" => SectionId::Offering,
        "participate" => SectionId::Participate,
        "resources" => SectionId::Resources,
        other => bail!("unknown section `{other}`"),
    })
}

struct Shell {
    i18n: Arc<I18n>,
    document: Arc<InMemoryDocument>,
    preferences: Preferences,
    router: HistoryRouter,
    navigation: NavigationController,
}

impl Shell {
    fn boot(config: &SiteConfig, storage: LocalStorage) -> Result<Self> {
        let i18n = Arc::new(I18n::new());
        let translations: Arc<dyn Translations> = i18n.clone();
        let registry =
            Arc::new(RouteRegistry::site(translations).context("invalid route table")?);
        let document = Arc::new(InMemoryDocument::new());
        let preferences = Preferences::boot(
            Arc::new(storage),
            &ProcessEnvironment,
            Arc::clone(&document) as Arc<dyn DocumentMarkers>,
            PreferenceDefaults {
                language: config.default_language,
                theme: config.default_theme,
            },
        );

        preferences.language().subscribe(|language| {
            info!(fragment = "navigation", %language, "re-rendering");
        });
        preferences.language().subscribe(|language| {
            info!(fragment = "page", %language, "re-rendering");
        });
        preferences.theme().subscribe(|theme| {
            info!(fragment = "theme-toggle", %theme, "re-rendering");
        });

        let router = HistoryRouter::new("/");
        let navigation = NavigationController::new(registry, router.current_path())
            .with_compact_threshold(config.compact_scroll_threshold);

        Ok(Self {
            i18n,
            document,
            preferences,
            router,
            navigation,
        })
    }

    fn run(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Goto(path) => self.navigation.follow_link(&self.router, &path),
            Command::Back => {
                self.router.back();
                self.navigation.sync_location(&self.router);
            }
            Command::Forward => {
                self.router.forward();
                self.navigation.sync_location(&self.router);
            }
            Command::Open(section, mode) => {
                if mode == LayoutMode::Mobile && !self.navigation.state().mobile_drawer_open {
                    self.navigation.toggle_mobile_drawer();
                }
                self.navigation.toggle_panel(section, mode);
            }
            Command::Drawer => self.navigation.toggle_mobile_drawer(),
            Command::ClickOutside => {
                self.navigation.on_pointer_down(PointerTarget::Outside);
            }
            Command::ClickInside => {
                self.navigation.on_pointer_down(PointerTarget::InsideNavigation);
            }
            Command::Scroll(offset) => self.navigation.on_scroll(offset),
            Command::ToggleLanguage => {
                self.preferences.language().toggle();
            }
            Command::ToggleTheme => {
                self.preferences.theme().toggle();
            }
            Command::Render => return Some(self.render()),
        }
        None
    }

    fn render(&self) -> String {
        let language = self.preferences.language().get();
        let theme = self.preferences.theme().get();
        let view = self.navigation.view(language);
        let toggle = theme_toggle(theme, language, self.i18n.as_ref());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "path={} lang={} theme={} dark-class={} [{}] [{}]",
            self.navigation.current_path(),
            self.document.lang_attribute().unwrap_or("-"),
            theme,
            self.document.has_dark_class(),
            language_switch_label(language),
            toggle.aria_label,
        );
        render_view(&mut out, &view);
        out
    }
}

fn render_view(out: &mut String, view: &NavigationView) {
    let _ = writeln!(out, "desktop{}:", if view.compact { " (compact)" } else { "" });
    for button in &view.desktop {
        let _ = writeln!(
            out,
            "  {}{}{}",
            marker(button.highlighted),
            button.label,
            if button.expanded { " [open]" } else { "" }
        );
        if button.expanded {
            for link in &button.links {
                let _ = writeln!(out, "      {}{} {}", marker(link.active), link.label, link.path);
            }
        }
    }
    for action in &view.actions {
        let _ = writeln!(
            out,
            "  {}{}{}",
            marker(action.link.active),
            action.link.label,
            if action.primary { " (primary)" } else { "" }
        );
    }

    let _ = writeln!(
        out,
        "mobile: {} ({})",
        if view.mobile.drawer_open { "open" } else { "closed" },
        view.mobile.toggle_label
    );
    if view.mobile.drawer_open {
        for section in &view.mobile.sections {
            let _ = writeln!(out, "  {}{}", marker(section.highlighted), section.label);
            if section.expanded {
                for link in &section.links {
                    let _ = writeln!(out, "      {}{}", marker(link.active), link.label);
                }
            }
        }
    }
}

fn marker(active: bool) -> &'static str {
    if active { "* " } else { "  " }
}

fn main() {
    let mut data_dir = dirs::data_local_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    data_dir.push("forkit");
    if let Err(err) = fs::create_dir_all(&data_dir) {
        eprintln!("failed to prepare data dir: {err}");
    }
    let _log_guard = init_local_logger(&data_dir.join("logs"));

    let config_store = ConfigStore::from_dir(data_dir.join("config"));
    let config = match config_store.load_or_init() {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("failed to load config: {err:#}");
            SiteConfig::default()
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let commands = match parse_commands(&args) {
        Ok(commands) => commands,
        Err(err) => {
            error!("invalid command line: {err:#}");
            eprintln!("{err:#}");
            return;
        }
    };

    let storage = LocalStorage::new(data_dir.join(&config.storage_file));
    let mut shell = match Shell::boot(&config, storage) {
        Ok(shell) => shell,
        Err(err) => {
            error!("failed to boot: {err:#}");
            eprintln!("failed to boot: {err:#}");
            return;
        }
    };
    info!(brand = %config.brand_name, commands = commands.len(), "shell ready");

    for command in commands {
        if let Some(frame) = shell.run(command) {
            print!("{frame}");
        }
    }
}

fn init_local_logger(log_dir: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    if let Err(err) = fs::create_dir_all(log_dir) {
        eprintln!("failed to create log dir `{}`: {err}", log_dir.display());
    }
    let file_appender = tracing_appender::rolling::daily(log_dir, "forkit.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,site_shell=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .with_writer(writer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use core_types::Language;
    use tempfile::tempdir;

    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parses_command_script_and_appends_render() {
        let commands =
            parse_commands(&args(&["goto", "/blog", "open", "main", "scroll", "12.5"]))
                .expect("parse");
        assert_eq!(
            commands,
            vec![
                Command::Goto("/blog".to_string()),
                Command::Open(SectionId::Main, LayoutMode::Desktop),
                Command::Scroll(12.5),
                Command::Render,
            ]
        );
    }

    #[test]
    fn rejects_unknown_commands_and_sections() {
        assert!(parse_commands(&args(&["fly"])).is_err());
        assert!(parse_commands(&args(&["open", "actions"])).is_err());
        assert!(parse_commands(&args(&["goto"])).is_err());
    }

    #[test]
    fn shell_renders_language_change_in_navigation() {
        let dir = tempdir().expect("tempdir");
        let storage = LocalStorage::from_dir(dir.path());
        let config = SiteConfig::default();
        let mut shell = Shell::boot(&config, storage).expect("boot");

        shell.run(Command::Goto("/ueber-uns".to_string()));
        shell.run(Command::Open(SectionId::Resources, LayoutMode::Desktop));
        shell.run(Command::ToggleLanguage);
        let target = shell.preferences.language().get();
        let frame = shell.run(Command::Render).expect("frame");

        assert!(frame.contains(&format!("lang={}", target.code())));
        let about = if target == Language::En { "About Us" } else { "Über uns" };
        assert!(frame.contains(&format!("* {about} /ueber-uns")));
    }
}
