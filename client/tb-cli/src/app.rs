use crate::{
    CliError, CliResult, board_commands::BoardCommands, comment_commands::CommentCommands,
    commands::Commands, find, find_commands::FindCommands, output,
    project_commands::ProjectCommands, ticket_commands::TicketCommands,
    user_commands::UserCommands,
};

use std::sync::Arc;

use log::info;
use serde::Serialize;
use serde_json::{Value, json};
use tb_board::{Board, BoardState};
use tb_config::{BoardConfig, Config, SearchConfig};
use tb_core::{
    Credentials, NewProject, NewTicket, ProjectUpdate, SignUpRequest, TicketStatus, TicketUpdate,
};
use tb_gateway::{Client, ProjectSearch, SessionContext, SessionStore, TicketSearch};
use tokio::io::BufReader;

/// Everything a command needs: the gateway client and the behavior settings.
pub struct App {
    client: Arc<Client>,
    board: BoardConfig,
    search: SearchConfig,
}

impl App {
    /// Build from loaded config, restoring the session from the config directory.
    pub fn from_config(config: &Config) -> CliResult<Self> {
        let store = SessionStore::new(config.session_path()?);
        Self::new(config, store)
    }

    pub fn new(config: &Config, store: SessionStore) -> CliResult<Self> {
        let session = SessionContext::load(store).map_err(tb_gateway::GatewayError::from)?;
        let client = Client::new(&config.gateway.base_url, Arc::new(session))?;

        Ok(Self {
            client: Arc::new(client),
            board: config.board.clone(),
            search: config.search.clone(),
        })
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    /// Run one command. `None` means the command already wrote its output.
    pub async fn run(&self, command: Commands) -> CliResult<Option<Value>> {
        let value = match command {
            Commands::Login { email, password } => {
                let session = self
                    .client
                    .login(&Credentials::new(email, password))
                    .await?;
                to_json(&session.user)?
            }
            Commands::Signup {
                username,
                email,
                password,
                role,
            } => {
                let request = SignUpRequest {
                    username,
                    email,
                    password,
                    role: role.parse()?,
                };
                let user = self.client.signup(&request).await?;
                json!({ "registered": true, "user": user })
            }
            Commands::Logout => {
                let was_logged_in = self.client.logout()?;
                json!({ "logged_out": was_logged_in })
            }
            Commands::Whoami => match self.client.session().current() {
                Some(session) => to_json(&session.user)?,
                None => return Err(CliError::command("Not logged in.")),
            },
            Commands::Project { action } => self.project(action).await?,
            Commands::Ticket { action } => self.ticket(action).await?,
            Commands::Comment { action } => self.comment(action).await?,
            Commands::User { action } => self.user(action).await?,
            Commands::Board { action } => self.board(action).await?,
            Commands::Find { action } => {
                self.find(action).await?;
                return Ok(None);
            }
        };
        Ok(Some(value))
    }

    async fn project(&self, action: ProjectCommands) -> CliResult<Value> {
        let client = &self.client;
        match action {
            ProjectCommands::List => to_json(&client.list_projects().await?),
            ProjectCommands::Get { id } => to_json(&client.get_project(&id).await?),
            ProjectCommands::Create {
                title,
                description,
                status,
            } => {
                let project = NewProject {
                    status,
                    ..NewProject::new(title, description)
                };
                to_json(&client.create_project(&project).await?)
            }
            ProjectCommands::Update {
                id,
                title,
                description,
                status,
            } => {
                let update = ProjectUpdate {
                    title,
                    description,
                    status,
                };
                to_json(&client.update_project(&id, &update).await?)
            }
            ProjectCommands::Delete { id } => {
                client.delete_project(&id).await?;
                Ok(json!({ "deleted": id }))
            }
            ProjectCommands::Search { key } => to_json(&client.search_projects(&key).await?),
            ProjectCommands::AddMember { id, user_id } => {
                to_json(&client.add_team_member(&id, &user_id).await?)
            }
            ProjectCommands::RemoveMember { id, user_id } => {
                to_json(&client.remove_team_member(&id, &user_id).await?)
            }
        }
    }

    async fn ticket(&self, action: TicketCommands) -> CliResult<Value> {
        let client = &self.client;
        match action {
            TicketCommands::List => to_json(&client.list_tickets().await?),
            TicketCommands::Get { id } => to_json(&client.get_ticket(&id).await?),
            TicketCommands::Create {
                project_id,
                title,
                description,
                priority,
                status,
                assignees,
            } => {
                let ticket = NewTicket {
                    priority: priority.parse()?,
                    status: status.parse()?,
                    assignee: assignees,
                    ..NewTicket::new(title, description, project_id)
                };
                to_json(&client.create_ticket(&ticket).await?)
            }
            TicketCommands::Update {
                id,
                title,
                description,
                priority,
                status,
                project_id,
            } => {
                let update = TicketUpdate {
                    title,
                    description,
                    priority: priority.map(|p| p.parse()).transpose()?,
                    status: status.map(|s| s.parse()).transpose()?,
                    project_id,
                    assignee: None,
                };
                to_json(&client.update_ticket(&id, &update).await?)
            }
            TicketCommands::Assign { id, user_ids } => {
                let update = TicketUpdate::assign(user_ids);
                to_json(&client.update_ticket(&id, &update).await?)
            }
            TicketCommands::Status { id, status } => {
                let status: TicketStatus = status.parse()?;
                client.update_ticket_status(&id, status).await?;
                Ok(json!({ "id": id, "status": status }))
            }
            TicketCommands::Delete { id } => {
                client.delete_ticket(&id).await?;
                Ok(json!({ "deleted": id }))
            }
            TicketCommands::Search { key } => to_json(&client.search_tickets(&key).await?),
            TicketCommands::ForProject { project_id } => {
                to_json(&client.project_tickets(&project_id).await?)
            }
        }
    }

    async fn comment(&self, action: CommentCommands) -> CliResult<Value> {
        match action {
            CommentCommands::List { ticket_id } => {
                to_json(&self.client.comment_history(&ticket_id).await?)
            }
            CommentCommands::Add { ticket_id, text } => {
                to_json(&self.client.add_comment(&ticket_id, &text).await?)
            }
        }
    }

    async fn user(&self, action: UserCommands) -> CliResult<Value> {
        match action {
            UserCommands::List => to_json(&self.client.list_users().await?),
            UserCommands::Get { id } => to_json(&self.client.get_user(&id).await?),
        }
    }

    async fn board(&self, action: BoardCommands) -> CliResult<Value> {
        let (mut board, mut notifications) = Board::new(self.client.clone(), &self.board);

        match action {
            BoardCommands::Show { project_id } => {
                let state = match project_id {
                    Some(project_id) => board.load_project(project_id).await,
                    None => board.load().await,
                };
                Ok(output::board(ready(&state)?))
            }
            BoardCommands::Move {
                ticket_id,
                from,
                from_index,
                to,
                to_index,
                project_id,
            } => {
                let state = match project_id {
                    Some(project_id) => board.load_project(project_id).await,
                    None => board.load().await,
                };
                ready(&state)?;

                let outcome = board.move_ticket(
                    &ticket_id,
                    &from,
                    from_index,
                    Some(to.as_str()),
                    to_index,
                )?;
                let persisted = match outcome.persistence {
                    Some(task) => Some(
                        task.await
                            .map_err(|e| CliError::command(format!("Save task failed: {e}")))?,
                    ),
                    None => None,
                };

                let mut notes = Vec::new();
                while let Ok(note) = notifications.try_recv() {
                    notes.push(output::notification(&note));
                }

                let state = board.state();
                Ok(json!({
                    "board": output::board(ready(&state)?),
                    "persistence": output::persisted(persisted.as_ref()),
                    "notifications": notes,
                }))
            }
        }
    }

    async fn find(&self, action: FindCommands) -> CliResult<()> {
        let window = self.search.debounce();
        let input = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();

        let written = match action {
            FindCommands::Tickets => {
                let source = Arc::new(TicketSearch::new(self.client.clone()));
                find::run(source, window, input, &mut stdout).await?
            }
            FindCommands::Projects => {
                let source = Arc::new(ProjectSearch::new(self.client.clone()));
                find::run(source, window, input, &mut stdout).await?
            }
        };
        info!("find wrote {written} result(s)");
        Ok(())
    }
}

fn ready(state: &BoardState) -> CliResult<&tb_board::BoardSnapshot> {
    match state {
        BoardState::Ready(snapshot) => Ok(snapshot.as_ref()),
        BoardState::Failed { message } => Err(CliError::command(message.clone())),
        BoardState::Loading => Err(CliError::command("Board is still loading.")),
    }
}

fn to_json<T: Serialize>(value: &T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}
