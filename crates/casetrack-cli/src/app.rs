//! Wires the application layer together and maps REPL commands onto it.

use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;

use casetrack_application::{
    AnalyticsView, AuthService, ComplainantSource, DetailMode, FetchOutcome, FirDetailView,
    FirQuery, FirSearchSource, FormService, ListView, MyFirsSource, OfficerQuery, OfficerSource,
    ProfileService, RemoveOutcome, Shell, StationSource, Visit,
};
use casetrack_core::api::CaseApi;
use casetrack_core::error::CaseTrackError;
use casetrack_core::model::{
    FirStatus, LoginCredentials, NewArrest, NewComplainant, NewEvidence, NewFir,
    NewHistoryEntry, NewOfficer, NewStation, NewSuspect, TimeGranularity,
};
use casetrack_core::navigation::{
    ComplainantScreen, NavigationMode, Navigator, OfficerScreen, Route, RouteGuard,
};
use casetrack_core::session::{PreferenceStore, Role, SessionRoleStore, ThemePreference};
use casetrack_core::ui::Notifier;
use casetrack_infrastructure::http::{ApiClient, AuthRedirectInterceptor, HttpCaseApi, ReqwestTransport};
use casetrack_infrastructure::{ClientConfig, FileTabStorage, InMemoryNavigator};

use crate::render;
use crate::terminal::{StdinConfirm, TerminalNotifier};

/// Line input for multi-field forms. `None` means the user cancelled.
pub trait Prompt {
    fn ask(&mut self, label: &str) -> Option<String>;
}

/// Whether the REPL keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Form screens filled in with `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKind {
    Login(Role),
    SelfRegistration,
    RegisterFir,
    AddOfficer,
    AddStation,
    AddComplainant,
}

/// Mutations offered on a FIR detail screen.
enum DetailAction {
    Status(FirStatus),
    Evidence(NewEvidence),
    Suspect(NewSuspect),
    Verify(String),
    Arrest(NewArrest),
    History(NewHistoryEntry),
}

enum Screen {
    Blank,
    Form(FormKind),
    Analytics(AnalyticsView),
    FirList(ListView<FirSearchSource>),
    MyFirs(ListView<MyFirsSource>),
    Officers(ListView<OfficerSource>),
    Stations(ListView<StationSource>),
    Complainants(ListView<ComplainantSource>),
    Detail(FirDetailView),
    Profile,
    NotFound,
}

impl Screen {
    fn dispose(&self) {
        match self {
            Screen::Analytics(view) => view.dispose(),
            Screen::FirList(view) => view.dispose(),
            Screen::MyFirs(view) => view.dispose(),
            Screen::Officers(view) => view.dispose(),
            Screen::Stations(view) => view.dispose(),
            Screen::Complainants(view) => view.dispose(),
            Screen::Detail(view) => view.dispose(),
            Screen::Blank | Screen::Form(_) | Screen::Profile | Screen::NotFound => {}
        }
    }
}

pub struct App {
    config: ClientConfig,
    tab_id: String,
    api: Arc<dyn CaseApi>,
    store: Arc<SessionRoleStore>,
    preferences: PreferenceStore,
    navigator: Arc<InMemoryNavigator>,
    notifier: Arc<dyn Notifier>,
    shell: Shell,
    auth: AuthService,
    forms: FormService,
    profile: ProfileService,
    screen: Screen,
    rendered_path: Option<String>,
}

impl App {
    pub fn build(config: ClientConfig) -> Result<Self> {
        let paths = config.paths();
        let tab_id = config.tab_id.clone().context("No tab selected")?;
        let tab_file = paths
            .tab_file(&tab_id)
            .context("Failed to resolve tab storage path")?;
        let profile_file = paths
            .profile_file()
            .context("Failed to resolve profile storage path")?;

        let store = Arc::new(
            SessionRoleStore::create(Arc::new(FileTabStorage::new(tab_file)))
                .context("Failed to open session role store")?,
        );
        let preferences = PreferenceStore::new(Arc::new(FileTabStorage::new(profile_file)));

        let start = store
            .get_role()
            .map(|role| role.home_path())
            .unwrap_or("/");
        let navigator = Arc::new(InMemoryNavigator::new(start));

        let transport = ReqwestTransport::new().context("Failed to create HTTP transport")?;
        let client = ApiClient::new(config.api_base(), Arc::new(transport)).with_interceptor(
            Arc::new(AuthRedirectInterceptor::with_default_policy(navigator.clone())),
        );
        let api: Arc<dyn CaseApi> = Arc::new(HttpCaseApi::new(client));
        let notifier: Arc<dyn Notifier> = Arc::new(TerminalNotifier);

        let shell = Shell::new(RouteGuard::new(store.clone()), navigator.clone());
        let auth = AuthService::new(api.clone(), store.clone(), navigator.clone(), notifier.clone());
        let forms = FormService::new(api.clone(), notifier.clone(), config.search_debounce());
        let profile = ProfileService::new(api.clone(), store.clone(), notifier.clone());

        tracing::info!(api = config.api_base(), tab = %tab_id, "Client ready");
        Ok(Self {
            config,
            tab_id,
            api,
            store,
            preferences,
            navigator,
            notifier,
            shell,
            auth,
            forms,
            profile,
            screen: Screen::Blank,
            rendered_path: None,
        })
    }

    pub fn prompt_label(&self) -> String {
        let role = self
            .store
            .get_role()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "guest".to_string());
        format!("{}:{}> ", role, self.navigator.current_path())
    }

    pub fn theme(&self) -> ThemePreference {
        self.preferences.theme().unwrap_or_default()
    }

    /// Renders whatever the navigator points at, following redirects.
    pub async fn sync(&mut self) {
        for _ in 0..4 {
            let current = self.navigator.current_path();
            if self.rendered_path.as_deref() == Some(current.as_str()) {
                return;
            }
            self.mount(&current).await;
        }
    }

    pub async fn execute(&mut self, line: &str, prompt: &mut dyn Prompt) -> Flow {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Flow::Continue;
        };
        let args: Vec<&str> = parts.collect();
        let rest = args.join(" ");

        let result = match command {
            "quit" | "exit" => return Flow::Quit,
            "help" => {
                print_help();
                Ok(())
            }
            "whoami" => {
                self.whoami();
                Ok(())
            }
            "open" | "go" => match args.first() {
                Some(path) => {
                    self.open(path).await;
                    Ok(())
                }
                None => Err(usage("open <path>")),
            },
            "home" => {
                let home = self.store.get_role().map(|r| r.home_path()).unwrap_or("/");
                self.open(home).await;
                Ok(())
            }
            "login" => self.login_command(&args, prompt).await,
            "logout" => self.auth.logout().await,
            "submit" => self.submit(prompt).await,
            "refresh" | "retry" => {
                self.refresh().await;
                Ok(())
            }
            "search" => self.search(&rest).await,
            "officers" => self.officer_lookup(&rest).await,
            "filter" => self.filter(&args).await,
            "delete" => self.delete(args.first().copied()).await,
            "status" => match args.first().map(|s| s.parse::<FirStatus>()) {
                Some(Ok(status)) => self.on_detail(DetailAction::Status(status)).await,
                _ => Err(usage("status <pending|investigation|solved|closed>")),
            },
            "add-evidence" => {
                let Some(fields) = ask_all(prompt, &["Evidence type", "File URL"]) else {
                    return Flow::Continue;
                };
                let evidence = NewEvidence {
                    evidence_type: fields[0].clone(),
                    file_url: fields[1].clone(),
                };
                self.on_detail(DetailAction::Evidence(evidence)).await
            }
            "add-suspect" => {
                let Some(fields) = ask_all(prompt, &["Name", "CNIC", "Description"]) else {
                    return Flow::Continue;
                };
                let suspect = NewSuspect {
                    name: fields[0].clone(),
                    cnic: fields[1].clone(),
                    description: fields[2].clone(),
                };
                self.on_detail(DetailAction::Suspect(suspect)).await
            }
            "verify" => match args.first() {
                Some(id) => self.on_detail(DetailAction::Verify(id.to_string())).await,
                None => Err(usage("verify <suspect_id>")),
            },
            "add-arrest" => {
                let Some(fields) = ask_all(prompt, &["Suspect id", "Officer id", "Description"])
                else {
                    return Flow::Continue;
                };
                let arrest = NewArrest {
                    fir_id: String::new(),
                    suspect_id: fields[0].clone(),
                    officer_id: fields[1].clone(),
                    description: fields[2].clone(),
                };
                self.on_detail(DetailAction::Arrest(arrest)).await
            }
            "add-history" => {
                let Some(fields) = ask_all(prompt, &["Status", "Description"]) else {
                    return Flow::Continue;
                };
                let entry = NewHistoryEntry {
                    status: fields[0].parse::<FirStatus>().ok(),
                    description: fields[1].clone(),
                };
                self.on_detail(DetailAction::History(entry)).await
            }
            "granularity" => match args.first().map(|s| s.parse::<TimeGranularity>()) {
                Some(Ok(granularity)) => {
                    self.set_granularity(granularity).await;
                    Ok(())
                }
                _ => Err(usage("granularity <day|week|month|year>")),
            },
            "theme" => self.theme_command(args.first().copied()),
            other => Err(CaseTrackError::not_permitted(format!(
                "Unknown command '{other}'. Type 'help'."
            ))),
        };

        if let Err(err) = result {
            report(&err);
        }
        self.sync().await;
        Flow::Continue
    }

    // ------------------------------------------------------------------
    // Screens
    // ------------------------------------------------------------------

    fn navigator_open(&self, path: &str) {
        // Resolution and any guard redirect happen in `sync`.
        self.navigator.navigate(path, NavigationMode::Push);
    }

    /// Opening the screen already shown refreshes it through the guard.
    async fn open(&mut self, path: &str) {
        if self.rendered_path.as_deref() == Some(path) && self.navigator.current_path() == path {
            self.refresh().await;
        } else {
            self.navigator_open(path);
        }
    }

    async fn mount(&mut self, path: &str) {
        let visit = self.shell.visit(path);
        if let Visit::Render(route) = &visit {
            if self.rekey_detail(route, path).await {
                return;
            }
        }

        // The previous screen stops applying responses before anything new loads.
        std::mem::replace(&mut self.screen, Screen::Blank).dispose();

        let route = match visit {
            Visit::Render(route) => route,
            Visit::Redirect(target) => {
                println!("{}", format!("Redirected to {target}").bright_black());
                return;
            }
            Visit::NoMatch => {
                self.replace_screen(Screen::Blank, path);
                println!("{}", format!("Nothing to show at {path}").bright_black());
                return;
            }
        };

        render::heading(&self.title(&route));
        let screen = match &route {
            Route::ComplainantLogin => self.form(FormKind::Login(Role::Complainant)),
            Route::OfficerLogin => self.form(FormKind::Login(Role::Officer)),
            Route::RegisterComplainant => self.form(FormKind::SelfRegistration),
            Route::Officer(screen) => self.mount_officer(screen).await,
            Route::Complainant(screen) => self.mount_complainant(screen).await,
        };
        self.replace_screen(screen, path);
    }

    /// FIR-to-FIR navigation under the same role keeps the detail view and
    /// switches its key.
    async fn rekey_detail(&mut self, route: &Route, path: &str) -> bool {
        let (mode, id) = match route {
            Route::Officer(OfficerScreen::FirDetail(id)) => (DetailMode::Manage, id),
            Route::Complainant(ComplainantScreen::FirDetail(id)) => (DetailMode::ReadOnly, id),
            _ => return false,
        };
        let Screen::Detail(view) = &self.screen else {
            return false;
        };
        if view.mode() != mode {
            return false;
        }

        render::heading(&self.title(route));
        view.set_key(id.clone()).await;
        render::detail(&view.state().await, mode);
        self.rendered_path = Some(path.to_string());
        true
    }

    fn replace_screen(&mut self, screen: Screen, path: &str) {
        self.screen = screen;
        self.rendered_path = Some(path.to_string());
    }

    fn form(&self, kind: FormKind) -> Screen {
        println!("{}", "Type 'submit' to fill in the form.".bright_black());
        if let FormKind::Login(role) = kind {
            let other = match role {
                Role::Complainant => "open /officer/login for officers, open /register-complainant to sign up",
                Role::Officer => "open / for complainants",
            };
            println!("{}", other.bright_black());
        }
        Screen::Form(kind)
    }

    async fn mount_officer(&self, screen: &OfficerScreen) -> Screen {
        let debounce = self.config.search_debounce();
        match screen {
            OfficerScreen::Analytics => {
                let view = AnalyticsView::new(self.api.clone());
                view.load().await;
                render::analytics(&view.state().await);
                Screen::Analytics(view)
            }
            OfficerScreen::RegisterFir | OfficerScreen::AddOfficer => {
                let options = self.forms.load_options().await;
                render::options(&options);
                if *screen == OfficerScreen::RegisterFir {
                    println!("{}", "Use 'officers <name>' to look up officer ids.".bright_black());
                    self.form(FormKind::RegisterFir)
                } else {
                    self.form(FormKind::AddOfficer)
                }
            }
            OfficerScreen::AddStation => self.form(FormKind::AddStation),
            OfficerScreen::AddComplainant => self.form(FormKind::AddComplainant),
            OfficerScreen::AllFirs => {
                let view = ListView::new(
                    FirSearchSource::new(self.api.clone()),
                    self.notifier.clone(),
                    debounce,
                );
                let (options, _) = tokio::join!(self.forms.filter_options(), view.mount());
                println!("{}", "Filter ids:".bright_black());
                render::filter_options(&options);
                render::firs(&view.items().await);
                Screen::FirList(view)
            }
            OfficerScreen::AllOfficers => {
                let view = ListView::new(
                    OfficerSource::new(self.api.clone()),
                    self.notifier.clone(),
                    debounce,
                );
                view.mount().await;
                render::officers(&view.items().await);
                Screen::Officers(view)
            }
            OfficerScreen::AllStations => {
                let view = ListView::new(
                    StationSource::new(self.api.clone()),
                    self.notifier.clone(),
                    debounce,
                );
                view.mount().await;
                render::stations(&view.items().await);
                Screen::Stations(view)
            }
            OfficerScreen::AllComplainants => {
                let view = ListView::new(
                    ComplainantSource::new(self.api.clone()),
                    self.notifier.clone(),
                    debounce,
                );
                view.mount().await;
                render::complainants(&view.items().await);
                Screen::Complainants(view)
            }
            OfficerScreen::Profile => self.mount_profile().await,
            OfficerScreen::FirDetail(id) => self.mount_detail(DetailMode::Manage, id).await,
            OfficerScreen::NotFound => {
                render::not_found(Role::Officer.home_path());
                Screen::NotFound
            }
        }
    }

    async fn mount_complainant(&self, screen: &ComplainantScreen) -> Screen {
        match screen {
            ComplainantScreen::MyFirs => {
                let view = ListView::new(
                    MyFirsSource::new(self.api.clone()),
                    self.notifier.clone(),
                    self.config.search_debounce(),
                );
                view.mount().await;
                render::firs(&view.items().await);
                Screen::MyFirs(view)
            }
            ComplainantScreen::Profile => self.mount_profile().await,
            ComplainantScreen::FirDetail(id) => self.mount_detail(DetailMode::ReadOnly, id).await,
            ComplainantScreen::NotFound => {
                render::not_found(Role::Complainant.home_path());
                Screen::NotFound
            }
        }
    }

    async fn mount_profile(&self) -> Screen {
        self.show_profile().await;
        Screen::Profile
    }

    async fn show_profile(&self) {
        match self.profile.load().await {
            Ok(profile) => render::profile(&profile),
            Err(err) => report(&err),
        }
    }

    async fn mount_detail(&self, mode: DetailMode, id: &str) -> Screen {
        let view = FirDetailView::new(
            self.api.clone(),
            self.notifier.clone(),
            self.navigator.clone(),
            mode,
            id,
        );
        view.load().await;
        render::detail(&view.state().await, mode);
        Screen::Detail(view)
    }

    fn title(&self, route: &Route) -> String {
        let theme = self.theme();
        let name = match route {
            Route::ComplainantLogin => "Complainant login".to_string(),
            Route::OfficerLogin => "Officer login".to_string(),
            Route::RegisterComplainant => "Register as complainant".to_string(),
            Route::Officer(OfficerScreen::FirDetail(id))
            | Route::Complainant(ComplainantScreen::FirDetail(id)) => format!("FIR {id}"),
            other => other.path(),
        };
        format!("== {name} == [{theme}]")
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    fn whoami(&self) {
        match self.store.get_role() {
            Some(role) => println!("Logged in as {}", role.to_string().bold()),
            None => println!("{}", "Not logged in".bright_black()),
        }
        println!("Server: {}  Tab: {}", self.config.api_base(), self.tab_id);
        println!(
            "{}",
            format!("Resume this session later with --tab {}", self.tab_id).bright_black()
        );
    }

    async fn login_command(&mut self, args: &[&str], prompt: &mut dyn Prompt) -> Result<(), CaseTrackError> {
        let role = match args.first().map(|r| r.parse::<Role>()) {
            Some(Ok(role)) => role,
            Some(Err(_)) => return Err(usage("login [officer|complainant]")),
            None => match self.screen {
                Screen::Form(FormKind::Login(role)) => role,
                _ => Role::Complainant,
            },
        };
        self.navigator_open(role.login_path());
        self.sync().await;
        self.submit(prompt).await
    }

    async fn submit(&mut self, prompt: &mut dyn Prompt) -> Result<(), CaseTrackError> {
        let Screen::Form(kind) = self.screen else {
            return Err(CaseTrackError::not_permitted("No form on this screen"));
        };
        match kind {
            FormKind::Login(role) => {
                let Some(fields) = ask_all(prompt, &["Email, CNIC or phone", "Password"]) else {
                    return Ok(());
                };
                let credentials = LoginCredentials {
                    identifier: fields[0].clone(),
                    password: fields[1].clone(),
                };
                self.auth.login(role, &credentials).await
            }
            FormKind::SelfRegistration | FormKind::AddComplainant => {
                let Some(complainant) = ask_complainant(prompt) else {
                    return Ok(());
                };
                if kind == FormKind::SelfRegistration {
                    self.auth.register_complainant(&complainant).await
                } else {
                    self.forms.create_complainant(&complainant).await
                }
            }
            FormKind::RegisterFir => {
                let Some(f) = ask_all(
                    prompt,
                    &[
                        "Complainant CNIC",
                        "Officer id",
                        "Station id",
                        "Crime type id",
                        "Description",
                        "Location (optional)",
                    ],
                ) else {
                    return Ok(());
                };
                let fir = NewFir {
                    complainant_id: f[0].clone(),
                    officer_id: f[1].clone(),
                    station_id: f[2].clone(),
                    type_id: f[3].clone(),
                    description: f[4].clone(),
                    location: f[5].clone(),
                };
                self.forms.register_fir(&fir).await
            }
            FormKind::AddOfficer => {
                let Some(f) = ask_all(
                    prompt,
                    &["Station id", "Name", "Badge number", "CNIC", "Rank", "Email", "Password"],
                ) else {
                    return Ok(());
                };
                let officer = NewOfficer {
                    station_id: f[0].clone(),
                    name: f[1].clone(),
                    badge_no: f[2].clone(),
                    cnic: f[3].clone(),
                    officer_rank: f[4].clone(),
                    email: f[5].clone(),
                    password: f[6].clone(),
                };
                self.forms.create_officer(&officer).await
            }
            FormKind::AddStation => {
                let Some(f) = ask_all(prompt, &["Name", "District", "Province", "City"]) else {
                    return Ok(());
                };
                let station = NewStation {
                    name: f[0].clone(),
                    district: f[1].clone(),
                    province: f[2].clone(),
                    city: f[3].clone(),
                };
                self.forms.create_station(&station).await
            }
        }
    }

    /// Re-runs the guard before fetching again. A role cleared by another
    /// holder of this tab redirects instead, and `sync` mounts the target.
    async fn refresh(&self) {
        if let Visit::Redirect(target) = self.shell.reload() {
            println!("{}", format!("Redirected to {target}").bright_black());
            return;
        }
        match &self.screen {
            Screen::Analytics(view) => {
                view.load().await;
                render::analytics(&view.state().await);
            }
            Screen::FirList(view) => {
                view.refresh().await;
                render::firs(&view.items().await);
            }
            Screen::MyFirs(view) => {
                view.refresh().await;
                render::firs(&view.items().await);
            }
            Screen::Officers(view) => {
                view.refresh().await;
                render::officers(&view.items().await);
            }
            Screen::Stations(view) => {
                view.refresh().await;
                render::stations(&view.items().await);
            }
            Screen::Complainants(view) => {
                view.refresh().await;
                render::complainants(&view.items().await);
            }
            Screen::Detail(view) => {
                view.retry().await;
                render::detail(&view.state().await, view.mode());
            }
            Screen::Profile => self.show_profile().await,
            Screen::Blank | Screen::Form(_) | Screen::NotFound => {}
        }
    }

    async fn search(&self, text: &str) -> Result<(), CaseTrackError> {
        let applied = match &self.screen {
            Screen::FirList(view) => {
                let outcome = view.search(text).await;
                if outcome.is_some() {
                    render::firs(&view.items().await);
                }
                outcome
            }
            Screen::Officers(view) => {
                let outcome = view.search(text).await;
                if outcome.is_some() {
                    render::officers(&view.items().await);
                }
                outcome
            }
            Screen::Stations(view) => {
                let outcome = view.search(text).await;
                if outcome.is_some() {
                    render::stations(&view.items().await);
                }
                outcome
            }
            Screen::Complainants(view) => {
                let outcome = view.search(text).await;
                if outcome.is_some() {
                    render::complainants(&view.items().await);
                }
                outcome
            }
            _ => return Err(CaseTrackError::not_permitted("Nothing to search on this screen")),
        };
        if applied.is_none() {
            println!("{}", "Search unchanged".bright_black());
        }
        Ok(())
    }

    async fn officer_lookup(&self, text: &str) -> Result<(), CaseTrackError> {
        if !matches!(self.screen, Screen::Form(FormKind::RegisterFir)) {
            return Err(CaseTrackError::not_permitted(
                "Officer lookup is part of the register FIR form",
            ));
        }
        if let Some(officers) = self.forms.search_officers(text).await {
            render::officers(&officers);
        }
        Ok(())
    }

    async fn filter(&self, args: &[&str]) -> Result<(), CaseTrackError> {
        match &self.screen {
            Screen::FirList(view) => {
                let query = fir_filters(view.query().await, args)?;
                match view.set_query(query).await {
                    Some(FetchOutcome::Applied) | Some(FetchOutcome::Failed) => {
                        render::firs(&view.items().await)
                    }
                    _ => println!("{}", "Filters unchanged".bright_black()),
                }
            }
            Screen::Officers(view) => {
                let query = officer_filters(view.query().await, args)?;
                match view.set_query(query).await {
                    Some(FetchOutcome::Applied) | Some(FetchOutcome::Failed) => {
                        render::officers(&view.items().await)
                    }
                    _ => println!("{}", "Filters unchanged".bright_black()),
                }
            }
            _ => {
                return Err(CaseTrackError::not_permitted(
                    "Filters apply to the FIR and officer lists",
                ));
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Option<&str>) -> Result<(), CaseTrackError> {
        if let Screen::Detail(view) = &self.screen {
            if view.delete(&StdinConfirm).await? == RemoveOutcome::Declined {
                println!("{}", "Cancelled".bright_black());
            }
            return Ok(());
        }

        let Some(id) = id else {
            return Err(usage("delete <id>"));
        };
        let outcome = match &self.screen {
            Screen::FirList(view) => {
                let outcome = view.remove(id, &StdinConfirm).await;
                render::firs(&view.items().await);
                outcome
            }
            Screen::Officers(view) => {
                let outcome = view.remove(id, &StdinConfirm).await;
                render::officers(&view.items().await);
                outcome
            }
            Screen::Stations(view) => {
                let outcome = view.remove(id, &StdinConfirm).await;
                render::stations(&view.items().await);
                outcome
            }
            Screen::Complainants(view) => {
                let outcome = view.remove(id, &StdinConfirm).await;
                render::complainants(&view.items().await);
                outcome
            }
            _ => return Err(CaseTrackError::not_permitted("Nothing to delete on this screen")),
        };
        if outcome == RemoveOutcome::Declined {
            println!("{}", "Cancelled".bright_black());
        }
        Ok(())
    }

    async fn on_detail(&self, action: DetailAction) -> Result<(), CaseTrackError> {
        let Screen::Detail(view) = &self.screen else {
            return Err(CaseTrackError::not_permitted("Open a FIR first"));
        };
        let result = match &action {
            DetailAction::Status(status) => view.update_status(*status).await,
            DetailAction::Evidence(evidence) => view.add_evidence(evidence).await,
            DetailAction::Suspect(suspect) => view.add_suspect(suspect).await,
            DetailAction::Verify(suspect_id) => view.verify_suspect(suspect_id).await,
            DetailAction::Arrest(arrest) => view.add_arrest(arrest).await,
            DetailAction::History(entry) => view.add_history(entry).await,
        };
        render::detail(&view.state().await, view.mode());
        result
    }

    async fn set_granularity(&self, granularity: TimeGranularity) {
        if let Screen::Analytics(view) = &self.screen {
            view.set_granularity(granularity).await;
            render::analytics(&view.state().await);
        } else {
            report(&CaseTrackError::not_permitted("Granularity applies to analytics"));
        }
    }

    fn theme_command(&self, arg: Option<&str>) -> Result<(), CaseTrackError> {
        let next = match arg {
            None | Some("toggle") => match self.theme() {
                ThemePreference::Light => ThemePreference::Dark,
                ThemePreference::Dark => ThemePreference::Light,
            },
            Some(value) => value
                .parse::<ThemePreference>()
                .map_err(|_| usage("theme [light|dark|toggle]"))?,
        };
        self.preferences.set_theme(next)?;
        println!("Theme: {}", next.to_string().bold());
        Ok(())
    }
}

fn fir_filters(mut query: FirQuery, args: &[&str]) -> Result<FirQuery, CaseTrackError> {
    if args == ["clear"] {
        return Ok(FirQuery::default());
    }
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            return Err(usage("filter [status=..] [officer=..] [station=..] [type=..] | clear"));
        };
        let value = value.to_string();
        match key {
            "status" => query.filters.status = value,
            "officer" => query.filters.officer_id = value,
            "station" => query.filters.station_id = value,
            "type" => query.filters.type_id = value,
            _ => return Err(usage("filter keys: status, officer, station, type")),
        }
    }
    Ok(query)
}

/// Only `station=` applies to officers. An empty value drops the filter.
fn officer_filters(mut query: OfficerQuery, args: &[&str]) -> Result<OfficerQuery, CaseTrackError> {
    if args == ["clear"] {
        query.station_id = None;
        return Ok(query);
    }
    for arg in args {
        match arg.split_once('=') {
            Some(("station", value)) => {
                query.station_id = Some(value.to_string()).filter(|v| !v.is_empty());
            }
            _ => return Err(usage("filter station=<station_id> | clear")),
        }
    }
    Ok(query)
}

fn ask_all(prompt: &mut dyn Prompt, labels: &[&str]) -> Option<Vec<String>> {
    labels
        .iter()
        .map(|label| prompt.ask(label).map(|v| v.trim().to_string()))
        .collect()
}

fn ask_complainant(prompt: &mut dyn Prompt) -> Option<NewComplainant> {
    let f = ask_all(
        prompt,
        &["Name", "Phone (+92 XXX XXXXXXX)", "CNIC", "Email", "Password", "Address"],
    )?;
    Some(NewComplainant {
        name: f[0].clone(),
        phone: f[1].clone(),
        cnic: f[2].clone(),
        email: f[3].clone(),
        password: f[4].clone(),
        address: f[5].clone(),
    })
}

fn usage(text: &str) -> CaseTrackError {
    CaseTrackError::not_permitted(format!("Usage: {text}"))
}

/// Server failures were already shown by the view; everything else is
/// printed here.
fn report(err: &CaseTrackError) {
    match err {
        CaseTrackError::Api(_) => {}
        CaseTrackError::Validation(errors) => {
            for field in errors.errors() {
                eprintln!("{}", format!("  {}: {}", field.field, field.message).red());
            }
        }
        CaseTrackError::NotPermitted(message) => eprintln!("{}", message.yellow()),
        other => eprintln!("{}", other.user_message().red()),
    }
}

fn print_help() {
    let lines = [
        ("open <path>", "go to a screen, e.g. /officer/dashboard/all-fir"),
        ("home", "go to your dashboard"),
        ("login [officer|complainant]", "sign in"),
        ("logout", "sign out"),
        ("whoami", "show the current role and tab"),
        ("submit", "fill in the form on this screen"),
        ("refresh | retry", "check access and fetch this screen again"),
        ("search <text>", "search the current list"),
        ("filter k=v ... | clear", "FIR list: status, officer, station, type; officers: station"),
        ("officers <name>", "look up officers while registering a FIR"),
        ("delete [id]", "delete a row, or the open FIR"),
        ("status <s>", "change the open FIR's status"),
        ("add-evidence | add-suspect | add-arrest | add-history", "FIR detail forms"),
        ("verify <suspect_id>", "mark a suspect verified"),
        ("granularity <g>", "crime-rate bucket: day, week, month, year"),
        ("theme [light|dark|toggle]", "display preference"),
        ("quit", "exit"),
    ];
    for (command, what) in lines {
        println!("  {:<52} {}", command.bright_cyan(), what.bright_black());
    }
}
