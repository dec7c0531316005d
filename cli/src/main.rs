mod storage;
mod transport;


use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use portal::config::DEFAULT_API_BASE_URL;
use portal::services::auth::SignUpRequest;
use portal::services::categories::{self, CategoryInput};
use portal::services::courses::{self, CourseInput, CourseLevel, CourseQuery};
use portal::services::demo_classes::{self, DemoClassBooking, DemoClassQuery, DemoClassStatus};
use portal::services::history::{self, EntityKind, HistoryQuery};
use portal::services::media::{self, MediaInput, MediaKind};
use portal::services::tutors::{self, TutorInput, TutorQuery, TutorStatus};
use portal::{ApiClient, ApiError, AuthError, ClientConfig, KeyValueStorage, Role, SessionController, Transport};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::FileStorage;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no state file location; pass --state-file or set TUTORHUB_STATE_FILE")]
    NoStatePath,
    #[error("could not build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("not signed in; run `tutorhub-cli login` first")]
    NotSignedIn,
    #[error("could not render output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "tutorhub-cli", about = "TutorHub marketplace API client")]
struct Cli {
    #[arg(long, env = "TUTORHUB_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Where the session token is kept (default: ~/.tutorhub/session.json).
    #[arg(long, env = "TUTORHUB_STATE_FILE")]
    state_file: Option<PathBuf>,

    #[arg(long, env = "TUTORHUB_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Log requests and session transitions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and remember the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "TUTORHUB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Register a student or tutor account and sign in.
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long, env = "TUTORHUB_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        full_name: String,
        #[arg(long, default_value = "student")]
        role: Role,
    },
    /// Forget the stored session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    Categories(CategoriesCommand),
    Tutors(TutorsCommand),
    Courses(CoursesCommand),
    DemoClasses(DemoClassesCommand),
    History(HistoryArgs),
    Media(MediaCommand),
}

#[derive(Args, Debug)]
struct CategoriesCommand {
    #[command(subcommand)]
    command: CategoriesSubcommand,
}

#[derive(Subcommand, Debug)]
enum CategoriesSubcommand {
    List,
    Get {
        id: String,
    },
    Create(CategoryArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: CategoryArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct CategoryArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    icon: Option<String>,
    /// Hide the category from the public catalogue.
    #[arg(long, default_value_t = false)]
    inactive: bool,
}

impl From<CategoryArgs> for CategoryInput {
    fn from(args: CategoryArgs) -> Self {
        CategoryInput { name: args.name, description: args.description, icon: args.icon, is_active: !args.inactive }
    }
}

#[derive(Args, Debug)]
struct TutorsCommand {
    #[command(subcommand)]
    command: TutorsSubcommand,
}

#[derive(Subcommand, Debug)]
enum TutorsSubcommand {
    List {
        #[arg(long, value_parser = parse_wire::<TutorStatus>)]
        status: Option<TutorStatus>,
        #[arg(long)]
        category_id: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Get {
        id: String,
    },
    Create(TutorArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: TutorArgs,
    },
    /// Approve, reject or suspend a tutor.
    SetStatus {
        id: String,
        #[arg(value_parser = parse_wire::<TutorStatus>)]
        status: TutorStatus,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct TutorArgs {
    #[arg(long)]
    full_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    bio: Option<String>,
    /// Comma-separated, e.g. `algebra,calculus`.
    #[arg(long, value_delimiter = ',')]
    subjects: Vec<String>,
    #[arg(long = "category-id", value_delimiter = ',')]
    category_ids: Vec<String>,
    #[arg(long)]
    hourly_rate: Option<f64>,
}

impl From<TutorArgs> for TutorInput {
    fn from(args: TutorArgs) -> Self {
        TutorInput {
            full_name: args.full_name,
            email: args.email,
            bio: args.bio,
            subjects: args.subjects,
            category_ids: args.category_ids,
            hourly_rate: args.hourly_rate,
        }
    }
}

#[derive(Args, Debug)]
struct CoursesCommand {
    #[command(subcommand)]
    command: CoursesSubcommand,
}

#[derive(Subcommand, Debug)]
enum CoursesSubcommand {
    List {
        #[arg(long)]
        category_id: Option<String>,
        #[arg(long)]
        tutor_id: Option<String>,
        #[arg(long)]
        published: Option<bool>,
    },
    Get {
        id: String,
    },
    Create(CourseArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: CourseArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct CourseArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    category_id: Option<String>,
    #[arg(long)]
    tutor_id: Option<String>,
    #[arg(long)]
    price: Option<f64>,
    #[arg(long, value_parser = parse_wire::<CourseLevel>)]
    level: Option<CourseLevel>,
    #[arg(long, default_value_t = false)]
    publish: bool,
}

impl From<CourseArgs> for CourseInput {
    fn from(args: CourseArgs) -> Self {
        CourseInput {
            title: args.title,
            description: args.description,
            category_id: args.category_id,
            tutor_id: args.tutor_id,
            price: args.price,
            level: args.level,
            is_published: args.publish,
        }
    }
}

#[derive(Args, Debug)]
struct DemoClassesCommand {
    #[command(subcommand)]
    command: DemoClassesSubcommand,
}

#[derive(Subcommand, Debug)]
enum DemoClassesSubcommand {
    List {
        #[arg(long)]
        tutor_id: Option<String>,
        #[arg(long)]
        student_id: Option<String>,
        #[arg(long, value_parser = parse_wire::<DemoClassStatus>)]
        status: Option<DemoClassStatus>,
    },
    Get {
        id: String,
    },
    /// Request a demo class with a tutor.
    Book {
        #[arg(long)]
        tutor_id: String,
        /// Start time, e.g. 2026-10-21T09:00:00Z.
        #[arg(long)]
        at: String,
        #[arg(long, default_value_t = 30)]
        duration: u32,
        #[arg(long)]
        course_id: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    SetStatus {
        id: String,
        #[arg(value_parser = parse_wire::<DemoClassStatus>)]
        status: DemoClassStatus,
        #[arg(long)]
        meeting_url: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct HistoryArgs {
    #[arg(long, value_parser = parse_wire::<EntityKind>)]
    entity: Option<EntityKind>,
    #[arg(long)]
    actor_id: Option<String>,
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long, default_value_t = history::DEFAULT_PAGE_SIZE)]
    limit: u32,
}

#[derive(Args, Debug)]
struct MediaCommand {
    #[command(subcommand)]
    command: MediaSubcommand,
}

#[derive(Subcommand, Debug)]
enum MediaSubcommand {
    List {
        /// Only items shown on the home page, in display order.
        #[arg(long, default_value_t = false)]
        active: bool,
    },
    Create(MediaArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: MediaArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct MediaArgs {
    #[arg(long)]
    title: String,
    /// `image` or `video`.
    #[arg(long, value_parser = parse_wire::<MediaKind>)]
    kind: MediaKind,
    #[arg(long)]
    url: String,
    #[arg(long)]
    thumbnail_url: Option<String>,
    #[arg(long)]
    link_url: Option<String>,
    #[arg(long, default_value_t = 0)]
    position: i32,
    /// Keep the item off the home page.
    #[arg(long, default_value_t = false)]
    inactive: bool,
}

impl From<MediaArgs> for MediaInput {
    fn from(args: MediaArgs) -> Self {
        MediaInput {
            title: args.title,
            kind: args.kind,
            url: args.url,
            thumbnail_url: args.thumbnail_url,
            link_url: args.link_url,
            position: args.position,
            is_active: !args.inactive,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let state_file = cli.state_file.clone().or_else(FileStorage::default_path).ok_or(CliError::NoStatePath)?;
    let config = ClientConfig::new(&cli.base_url).with_timeout(Duration::from_secs(cli.timeout_secs.max(1)));
    let client = ApiClient::new(config, ReqwestTransport::new()?, FileStorage::new(state_file));
    let controller = SessionController::new(client);
    controller.restore();

    let result = run(&controller, cli.command).await;
    if controller.session().is_expired() {
        eprintln!("Session expired. Run `tutorhub-cli login` to sign in again.");
    }
    result
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();
}

async fn run<T: Transport, S: KeyValueStorage>(
    controller: &SessionController<T, S>,
    command: Command,
) -> Result<(), CliError> {
    let client = controller.client();
    match command {
        Command::Login { email, password } => {
            let user = controller.sign_in(&email, &password).await?;
            println!("Signed in as {} ({})", user.display_name(), user.role);
            Ok(())
        }
        Command::Signup { email, password, full_name, role } => {
            let request = SignUpRequest { email, password, full_name, role };
            let user = controller.sign_up(&request).await?;
            println!("Registered and signed in as {} ({})", user.display_name(), user.role);
            Ok(())
        }
        Command::Logout => {
            controller.sign_out();
            println!("Signed out");
            Ok(())
        }
        Command::Whoami => {
            let session = controller.session();
            let user = session.user().ok_or(CliError::NotSignedIn)?;
            print_json(user)
        }
        Command::Categories(command) => run_categories(client, command).await,
        Command::Tutors(command) => run_tutors(client, command).await,
        Command::Courses(command) => run_courses(client, command).await,
        Command::DemoClasses(command) => run_demo_classes(client, command).await,
        Command::History(args) => run_history(client, args).await,
        Command::Media(command) => run_media(client, command).await,
    }
}

async fn run_categories<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    command: CategoriesCommand,
) -> Result<(), CliError> {
    match command.command {
        CategoriesSubcommand::List => print_json(&categories::list(client).await?),
        CategoriesSubcommand::Get { id } => print_json(&categories::get(client, &id).await?),
        CategoriesSubcommand::Create(fields) => print_json(&categories::create(client, &fields.into()).await?),
        CategoriesSubcommand::Update { id, fields } => {
            print_json(&categories::update(client, &id, &fields.into()).await?)
        }
        CategoriesSubcommand::Delete { id } => {
            categories::delete(client, &id).await?;
            println!("Deleted category {id}");
            Ok(())
        }
    }
}

async fn run_tutors<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    command: TutorsCommand,
) -> Result<(), CliError> {
    match command.command {
        TutorsSubcommand::List { status, category_id, page, limit } => {
            let query = TutorQuery { status, category_id, page, limit };
            print_json(&tutors::list(client, &query).await?)
        }
        TutorsSubcommand::Get { id } => print_json(&tutors::get(client, &id).await?),
        TutorsSubcommand::Create(fields) => print_json(&tutors::create(client, &fields.into()).await?),
        TutorsSubcommand::Update { id, fields } => print_json(&tutors::update(client, &id, &fields.into()).await?),
        TutorsSubcommand::SetStatus { id, status } => print_json(&tutors::set_status(client, &id, status).await?),
        TutorsSubcommand::Delete { id } => {
            tutors::delete(client, &id).await?;
            println!("Deleted tutor {id}");
            Ok(())
        }
    }
}

async fn run_courses<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    command: CoursesCommand,
) -> Result<(), CliError> {
    match command.command {
        CoursesSubcommand::List { category_id, tutor_id, published } => {
            let query = CourseQuery { category_id, tutor_id, published };
            print_json(&courses::list(client, &query).await?)
        }
        CoursesSubcommand::Get { id } => print_json(&courses::get(client, &id).await?),
        CoursesSubcommand::Create(fields) => print_json(&courses::create(client, &fields.into()).await?),
        CoursesSubcommand::Update { id, fields } => print_json(&courses::update(client, &id, &fields.into()).await?),
        CoursesSubcommand::Delete { id } => {
            courses::delete(client, &id).await?;
            println!("Deleted course {id}");
            Ok(())
        }
    }
}

async fn run_demo_classes<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    command: DemoClassesCommand,
) -> Result<(), CliError> {
    match command.command {
        DemoClassesSubcommand::List { tutor_id, student_id, status } => {
            let query = DemoClassQuery { tutor_id, student_id, status };
            print_json(&demo_classes::list(client, &query).await?)
        }
        DemoClassesSubcommand::Get { id } => print_json(&demo_classes::get(client, &id).await?),
        DemoClassesSubcommand::Book { tutor_id, at, duration, course_id, notes } => {
            let booking = DemoClassBooking { tutor_id, course_id, scheduled_at: at, duration_minutes: duration, notes };
            print_json(&demo_classes::book(client, &booking).await?)
        }
        DemoClassesSubcommand::SetStatus { id, status, meeting_url } => {
            print_json(&demo_classes::update_status(client, &id, status, meeting_url.as_deref()).await?)
        }
        DemoClassesSubcommand::Delete { id } => {
            demo_classes::delete(client, &id).await?;
            println!("Deleted demo class {id}");
            Ok(())
        }
    }
}

async fn run_history<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    args: HistoryArgs,
) -> Result<(), CliError> {
    let query = HistoryQuery { entity_type: args.entity, actor_id: args.actor_id, page: args.page, limit: args.limit };
    let page = history::list(client, &query).await?;
    print_json(&page.entries)?;
    let more = if page.has_more() { ", more available" } else { "" };
    eprintln!("page {} ({} entries total{more})", page.page, page.total);
    Ok(())
}

async fn run_media<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    command: MediaCommand,
) -> Result<(), CliError> {
    match command.command {
        MediaSubcommand::List { active: true } => print_json(&media::list_active(client).await?),
        MediaSubcommand::List { active: false } => print_json(&media::list(client).await?),
        MediaSubcommand::Create(fields) => print_json(&media::create(client, &fields.into()).await?),
        MediaSubcommand::Update { id, fields } => print_json(&media::update(client, &id, &fields.into()).await?),
        MediaSubcommand::Delete { id } => {
            media::delete(client, &id).await?;
            println!("Deleted featured media {id}");
            Ok(())
        }
    }
}

/// Parse a lowercase wire value (`approved`, `demo_class`, ...) into one of
/// the service enums.
fn parse_wire<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized)).map_err(|_| format!("unknown value `{raw}`"))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
