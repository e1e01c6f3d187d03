use crate::auth_response::AuthResponse;
use crate::{GatewayError, GatewayResult, Session, SessionContext};

use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tb_core::{
    Comment, Credentials, NewComment, NewProject, NewTicket, Project, ProjectUpdate,
    SignUpRequest, StatusUpdate, TeamMemberChange, Ticket, TicketStatus, TicketUpdate, User,
};

const INVALID_TICKET_DATA: &str = "Received invalid ticket data from API.";
const INVALID_PROJECT_DATA: &str = "Received invalid project data from API.";
const INVALID_USER_DATA: &str = "Received invalid user data from API.";
const INVALID_COMMENT_DATA: &str = "Received invalid comment data from API.";
const MISSING_TOKEN: &str = "Authentication token not found. Please log in.";
const INVALID_CREDENTIALS: &str = "Invalid credentials, please try again.";

/// HTTP client for the ticket API
pub struct Client {
    base_url: Url,
    session: Arc<SessionContext>,
    http: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:5000")
    /// * `session` - Login state; its token is attached to authenticated writes
    #[track_caller]
    pub fn new(base_url: &str, session: Arc<SessionContext>) -> GatewayResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GatewayError::invalid_url(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::invalid_url(format!(
                "{base_url} cannot be used as a base URL"
            )));
        }

        Ok(Self {
            base_url,
            session,
            http: ReqwestClient::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Build the URL for `segments`, percent-encoding each one
    pub fn url(&self, segments: &[&str]) -> GatewayResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::invalid_url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build an anonymous request
    fn request(&self, method: Method, segments: &[&str]) -> GatewayResult<RequestBuilder> {
        let url = self.url(segments)?;
        debug!("{method} {url}");
        Ok(self.http.request(method, url))
    }

    /// Build a request carrying the session's bearer token, when logged in
    fn authorized(&self, method: Method, segments: &[&str]) -> GatewayResult<RequestBuilder> {
        let req = self.request(method, segments)?;
        Ok(match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        })
    }

    /// Execute request and handle errors
    ///
    /// Non-2xx responses become [`GatewayError::Api`] with the body's
    /// `message` (or `error`) field, else `default_message`.
    async fn execute(&self, req: RequestBuilder, default_message: &str) -> GatewayResult<Value> {
        let response = req.send().await.map_err(GatewayError::no_response)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(GatewayError::no_response)?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(body) => body,
                Err(_) if !status.is_success() => Value::Null,
                Err(e) => {
                    return Err(GatewayError::data_shape(format!(
                        "Response was not JSON: {e}"
                    )));
                }
            }
        };

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| default_message.to_string());
            warn!("Request failed with {status}: {message}");
            return Err(GatewayError::api(status.as_u16(), message));
        }

        Ok(body)
    }

    /// Execute and decode the body as `T`
    async fn fetch<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        default_message: &str,
        shape_message: &str,
    ) -> GatewayResult<T> {
        let body = self.execute(req, default_message).await?;
        decode(body, shape_message)
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Log in and store the returned session
    pub async fn login(&self, credentials: &Credentials) -> GatewayResult<Session> {
        credentials.validate()?;

        let req = self.request(Method::POST, &["login"])?.json(credentials);
        let response: AuthResponse = self
            .fetch(req, INVALID_CREDENTIALS, "Invalid login response from server.")
            .await?;

        let (Some(user), Some(token)) = (response.user, response.token) else {
            return Err(GatewayError::data_shape(
                "Invalid login response from server.",
            ));
        };

        let session = Session::new(user, token);
        self.session.set(session.clone())?;
        info!("Logged in as {}", session.user.display_name());
        Ok(session)
    }

    /// Register a new account. Does not log in.
    pub async fn signup(&self, request: &SignUpRequest) -> GatewayResult<Option<User>> {
        request.validate()?;

        let req = self.request(Method::POST, &["signup"])?.json(request);
        let response: AuthResponse = self
            .fetch(req, "Sign up failed.", "Invalid sign up response from server.")
            .await?;
        Ok(response.user)
    }

    /// Forget the stored session. Returns whether one was active.
    pub fn logout(&self) -> GatewayResult<bool> {
        Ok(self.session.clear()?)
    }

    // =========================================================================
    // Ticket Operations
    // =========================================================================

    /// List all tickets
    pub async fn list_tickets(&self) -> GatewayResult<Vec<Ticket>> {
        let req = self.request(Method::GET, &["ticket"])?;
        self.fetch(req, "Failed to load tickets.", INVALID_TICKET_DATA).await
    }

    /// Get a ticket by ID
    pub async fn get_ticket(&self, id: &str) -> GatewayResult<Ticket> {
        let req = self.request(Method::GET, &["ticket", id])?;
        self.fetch(req, "Failed to load ticket.", INVALID_TICKET_DATA).await
    }

    /// Create a ticket. Requires a logged-in session.
    pub async fn create_ticket(&self, ticket: &NewTicket) -> GatewayResult<Ticket> {
        ticket.validate()?;

        let Some(token) = self.session.token() else {
            return Err(GatewayError::unauthenticated(MISSING_TOKEN));
        };

        let req = self
            .request(Method::POST, &["ticket", ""])?
            .bearer_auth(token)
            .json(ticket);
        self.fetch(req, "Failed to create ticket.", INVALID_TICKET_DATA).await
    }

    /// Update ticket fields
    pub async fn update_ticket(&self, id: &str, update: &TicketUpdate) -> GatewayResult<Ticket> {
        update.validate()?;

        let req = self.authorized(Method::PUT, &["ticket", id])?.json(update);
        self.fetch(req, "Failed to update ticket.", INVALID_TICKET_DATA).await
    }

    /// Update only the status of a ticket
    pub async fn update_ticket_status(&self, id: &str, status: TicketStatus) -> GatewayResult<()> {
        let req = self
            .authorized(Method::PUT, &["ticket", id, "status"])?
            .json(&StatusUpdate { status });
        self.execute(req, "Failed to update ticket status.").await?;
        Ok(())
    }

    /// Delete a ticket
    pub async fn delete_ticket(&self, id: &str) -> GatewayResult<()> {
        let req = self.authorized(Method::DELETE, &["ticket", id])?;
        self.execute(req, "Failed to delete ticket.").await?;
        Ok(())
    }

    /// Tickets belonging to one project
    pub async fn project_tickets(&self, project_id: &str) -> GatewayResult<Vec<Ticket>> {
        let req = self.request(Method::GET, &["project-ticket", project_id])?;
        self.fetch(req, "Failed to load tickets.", INVALID_TICKET_DATA).await
    }

    /// Search tickets by key
    pub async fn search_tickets(&self, key: &str) -> GatewayResult<Vec<Ticket>> {
        let req = self.request(Method::GET, &["search-ticket", key])?;
        self.fetch(req, "Failed to search tickets.", INVALID_TICKET_DATA).await
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects
    pub async fn list_projects(&self) -> GatewayResult<Vec<Project>> {
        let req = self.request(Method::GET, &["project"])?;
        self.fetch(req, "Failed to load projects.", INVALID_PROJECT_DATA).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: &str) -> GatewayResult<Project> {
        let req = self.request(Method::GET, &["project", id])?;
        self.fetch(req, "Failed to load project.", INVALID_PROJECT_DATA).await
    }

    /// Create a new project
    pub async fn create_project(&self, project: &NewProject) -> GatewayResult<Project> {
        project.validate()?;

        let req = self.authorized(Method::POST, &["project", ""])?.json(project);
        self.fetch(req, "Failed to create project.", INVALID_PROJECT_DATA).await
    }

    /// Update a project
    pub async fn update_project(&self, id: &str, update: &ProjectUpdate) -> GatewayResult<Project> {
        update.validate()?;

        let req = self.authorized(Method::PUT, &["project", id])?.json(update);
        self.fetch(req, "Failed to update project.", INVALID_PROJECT_DATA).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: &str) -> GatewayResult<()> {
        let req = self.authorized(Method::DELETE, &["project", id])?;
        self.execute(req, "Failed to delete project.").await?;
        Ok(())
    }

    /// Search projects by key
    pub async fn search_projects(&self, key: &str) -> GatewayResult<Vec<Project>> {
        let req = self.request(Method::GET, &["search-project", key])?;
        self.fetch(req, "Failed to search projects.", INVALID_PROJECT_DATA).await
    }

    /// Add a user to the project team
    pub async fn add_team_member(&self, project_id: &str, user_id: &str) -> GatewayResult<Project> {
        let req = self
            .authorized(Method::PUT, &["project", project_id, "team"])?
            .json(&TeamMemberChange::new(user_id));
        self.fetch(req, "Failed to add team member.", INVALID_PROJECT_DATA).await
    }

    /// Remove a user from the project team
    pub async fn remove_team_member(
        &self,
        project_id: &str,
        user_id: &str,
    ) -> GatewayResult<Project> {
        let req = self
            .authorized(Method::PUT, &["project", project_id, "team", "remove"])?
            .json(&TeamMemberChange::new(user_id));
        self.fetch(req, "Failed to remove team member.", INVALID_PROJECT_DATA).await
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List all users
    pub async fn list_users(&self) -> GatewayResult<Vec<User>> {
        let req = self.request(Method::GET, &["user"])?;
        self.fetch(req, "Failed to load users.", INVALID_USER_DATA).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> GatewayResult<User> {
        let req = self.request(Method::GET, &["user", id])?;
        self.fetch(req, "Failed to load user.", INVALID_USER_DATA).await
    }

    // =========================================================================
    // Comment Operations
    // =========================================================================

    /// Post a comment as the logged-in user
    pub async fn add_comment(&self, ticket_id: &str, text: &str) -> GatewayResult<Comment> {
        let user_id = self.session.user_id();
        let comment = NewComment::new(text, user_id.as_deref(), ticket_id)?;

        let req = self
            .authorized(Method::POST, &["ticket", "comment"])?
            .json(&comment);
        self.fetch(req, "Failed to post comment.", INVALID_COMMENT_DATA).await
    }

    /// Comments on a ticket, oldest first as returned by the server
    pub async fn comment_history(&self, ticket_id: &str) -> GatewayResult<Vec<Comment>> {
        let req = self.request(Method::GET, &["ticket", "comment-history", ticket_id])?;
        self.fetch(req, "Failed to load comments.", INVALID_COMMENT_DATA).await
    }
}

/// Message from an error body: `message`, then `error` (string or `{ message }`)
pub(crate) fn error_message(body: &Value) -> Option<String> {
    let non_empty = |v: &Value| v.as_str().filter(|s| !s.is_empty()).map(String::from);

    body.get("message").and_then(non_empty).or_else(|| {
        body.get("error")
            .and_then(|e| non_empty(e).or_else(|| e.get("message").and_then(non_empty)))
    })
}

fn decode<T: DeserializeOwned>(body: Value, shape_message: &str) -> GatewayResult<T> {
    serde_json::from_value(body).map_err(|e| {
        debug!("Decode failed: {e}");
        GatewayError::data_shape(shape_message)
    })
}
