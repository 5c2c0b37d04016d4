//! Application wiring: routes commands through the guard and drives the
//! resource views.

use std::sync::Arc;

use gigboard_application::views::{
    AcceptedTasksView, AddJobView, HomeView, JobDetailsView, JobDraft, JobsView, MyPostedJobsView,
    UpdateJobView,
};
use gigboard_application::{AuthSession, NavOutcome, Router};
use gigboard_core::identity::{NewAccount, UserIdentity};
use gigboard_core::job::JobGateway;
use gigboard_core::route::Route;
use gigboard_core::view::{Notice, Notifier};

use crate::prompt::{self, TerminalConfirm, TerminalNotifier};
use crate::render;
use crate::shell::Command;

pub struct App {
    auth: Arc<AuthSession>,
    router: Router,
    notifier: Arc<TerminalNotifier>,
    home: HomeView,
    jobs: JobsView,
    details: JobDetailsView,
    add_job: AddJobView,
    update_job: UpdateJobView,
    my_jobs: MyPostedJobsView,
    tasks: AcceptedTasksView,
}

impl App {
    pub fn new(auth: Arc<AuthSession>, gateway: Arc<dyn JobGateway>) -> Self {
        let notifier = Arc::new(TerminalNotifier);
        let confirm = Arc::new(TerminalConfirm);

        Self {
            auth,
            router: Router::new(),
            notifier: Arc::clone(&notifier),
            home: HomeView::new(Arc::clone(&gateway), notifier.clone()),
            jobs: JobsView::new(Arc::clone(&gateway), notifier.clone()),
            details: JobDetailsView::new(Arc::clone(&gateway), notifier.clone()),
            add_job: AddJobView::new(Arc::clone(&gateway), notifier.clone()),
            update_job: UpdateJobView::new(Arc::clone(&gateway), notifier.clone()),
            my_jobs: MyPostedJobsView::new(Arc::clone(&gateway), notifier.clone(), confirm),
            tasks: AcceptedTasksView::new(gateway, notifier),
        }
    }

    pub async fn dispatch(&mut self, command: Command) {
        match command {
            Command::Home => self.open(Route::Home).await,
            Command::Jobs => self.open(Route::Jobs).await,
            Command::Job(id) => self.open(Route::JobDetails(id)).await,
            Command::Post => self.open(Route::AddJob).await,
            Command::Edit(id) => self.open(Route::UpdateJob(id)).await,
            Command::Mine => self.open(Route::MyPostedJobs).await,
            Command::Tasks => self.open(Route::AcceptedTasks).await,
            Command::Login => self.open(Route::Login).await,
            Command::Signup => self.open(Route::Signup).await,
            Command::Logout => self.logout().await,
            Command::Whoami => render::whoami(&self.auth.snapshot()),
            Command::Sort => {
                self.jobs.toggle_sort().await;
                render::jobs_list(self.jobs.jobs(), self.jobs.sort());
            }
            Command::Accept => {
                let user = self.auth.current_user();
                self.details.accept(user.as_ref()).await;
            }
            Command::Delete(id) => self.my_jobs.delete(&id).await,
            Command::Done(id) => self.tasks.mark_done(&id).await,
            Command::Cancel(id) => self.tasks.cancel(&id).await,
            // Help and Quit are handled in the shell loop
            Command::Help | Command::Quit => {}
        }
    }

    /// Enters a route through the guard. The guard re-runs on every entry.
    async fn open(&mut self, route: Route) {
        let session = self.auth.snapshot();
        match self.router.navigate(&session, route) {
            NavOutcome::SessionLoading => render::placeholder(),
            NavOutcome::RedirectedToLogin => {
                self.notifier
                    .notify(Notice::info("Please log in to continue."));
                self.login().await;
            }
            NavOutcome::Render(route) => self.render_route(route).await,
        }
    }

    async fn render_route(&mut self, route: Route) {
        match route {
            Route::Home => {
                self.home.refresh().await;
                render::latest_jobs(self.home.jobs());
            }
            Route::Jobs => {
                self.jobs.refresh().await;
                render::jobs_list(self.jobs.jobs(), self.jobs.sort());
            }
            Route::JobDetails(id) => {
                self.details.load(&id).await;
                if self.details.is_missing() {
                    render::not_found();
                } else if let Some(job) = self.details.job() {
                    let user = self.auth.current_user();
                    render::job_detail(job, self.details.viewer_owns(user.as_ref()));
                }
            }
            Route::AddJob => self.post_job().await,
            Route::UpdateJob(id) => self.edit_job(&id).await,
            Route::MyPostedJobs => {
                if let Some(user) = self.auth.current_user() {
                    self.my_jobs.refresh(&user.email).await;
                    render::my_jobs(self.my_jobs.jobs());
                }
            }
            Route::AcceptedTasks => {
                if let Some(user) = self.auth.current_user() {
                    self.tasks.refresh(&user.email).await;
                    render::accepted_tasks(self.tasks.tasks());
                }
            }
            Route::Login => self.login().await,
            Route::Signup => self.signup().await,
        }
    }

    async fn post_job(&mut self) {
        let Some(user) = self.auth.current_user() else {
            return;
        };

        let draft = JobDraft {
            title: prompt::read_field("Title"),
            category: prompt::choose_category(None),
            summary: prompt::read_field("Summary"),
            cover_image: prompt::read_field("Cover image URL"),
        };
        self.add_job.submit(&draft, &user).await;
    }

    async fn edit_job(&mut self, id: &str) {
        self.update_job.load(id).await;
        if self.update_job.is_missing() {
            render::not_found();
            return;
        }
        let Some(current) = self.update_job.draft() else {
            return;
        };

        let draft = JobDraft {
            title: prompt::read_field_with_default("Title", &current.title),
            category: prompt::choose_category(Some(&current.category)),
            summary: prompt::read_field_with_default("Summary", &current.summary),
            cover_image: prompt::read_field_with_default("Cover image URL", &current.cover_image),
        };

        if self.update_job.submit(&draft).await {
            // Success navigates back to the posted-jobs view
            Box::pin(self.open(Route::MyPostedJobs)).await;
        }
    }

    async fn login(&mut self) {
        let email = prompt::read_field("Email");
        let password = prompt::read_field("Password");

        match self.auth.sign_in(&email, &password).await {
            Ok(user) => {
                self.notifier.notify(Notice::success(format!(
                    "Welcome back, {}!",
                    user.display_name
                )));
                self.return_after_login().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "sign-in failed");
                self.notifier
                    .notify(Notice::error("Sign-in failed. Check your credentials."));
            }
        }
    }

    async fn signup(&mut self) {
        let account = NewAccount {
            email: prompt::read_field("Email"),
            password: prompt::read_field("Password"),
            display_name: prompt::read_field("Display name"),
            photo_url: {
                let url = prompt::read_field("Photo URL (optional)");
                if url.is_empty() { None } else { Some(url) }
            },
        };

        match self.auth.sign_up(&account).await {
            Ok(user) => {
                self.notifier.notify(Notice::success(format!(
                    "Welcome, {}! Your account is ready.",
                    user.display_name
                )));
                self.return_after_login().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "sign-up failed");
                self.notifier.notify(Notice::error("Sign-up failed."));
            }
        }
    }

    /// Navigates back to the route remembered at the login redirect.
    async fn return_after_login(&mut self) {
        if let Some(route) = self.router.take_return_route() {
            Box::pin(self.open(route)).await;
        }
    }

    async fn logout(&mut self) {
        match self.auth.sign_out().await {
            Ok(()) => self.notifier.notify(Notice::success("Signed out.")),
            Err(e) => {
                tracing::warn!(error = %e, "sign-out failed");
                self.notifier
                    .notify(Notice::error("Sign-out failed. You are still signed in."));
            }
        }
    }

    /// Greeting state for the shell banner.
    pub fn current_user(&self) -> Option<UserIdentity> {
        self.auth.current_user()
    }
}
