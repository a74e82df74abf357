use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use catalogo_api::{ApiClient, HttpEntityService};
use catalogo_config::ApiConfig;
use catalogo_forms::Field;
use catalogo_manager::{
  AssumeYes, CategoriaManager, CategoriaRef, Confirm, DeleteOutcome, LoadState, ProductoManager,
  SubmitOutcome,
};
use catalogo_model::{Categoria, EntityId, Producto};

mod render;

/// Catalogo - admin client for the categories and products API
#[derive(Parser)]
#[command(name = "catalogo")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Base URL of the API gateway (default: http://localhost:8080/api)
  #[arg(long, global = true, env = "CATALOGO_API_URL")]
  api_url: Option<String>,

  /// Path to a JSON client configuration file
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Manage categories
  Categorias {
    #[command(subcommand)]
    action: CategoriaAction,
  },

  /// Manage products
  Productos {
    #[command(subcommand)]
    action: ProductoAction,
  },
}

#[derive(Subcommand)]
enum CategoriaAction {
  /// List every category
  List,

  /// Create a category
  Create {
    #[arg(long)]
    nombre: String,
  },

  /// Rename a category
  Edit {
    id: EntityId,

    #[arg(long)]
    nombre: String,
  },

  /// Delete a category
  Delete {
    id: EntityId,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
  },
}

#[derive(Subcommand)]
enum ProductoAction {
  /// List every product with its category
  List,

  /// Show one product
  Show { id: EntityId },

  /// Create a product
  Create {
    #[arg(long)]
    nombre: String,

    #[arg(long)]
    precio: String,

    #[arg(long)]
    categoria_id: String,
  },

  /// Change fields of a product; omitted fields keep their value
  Edit {
    id: EntityId,

    #[arg(long)]
    nombre: Option<String>,

    #[arg(long)]
    precio: Option<String>,

    #[arg(long)]
    categoria_id: Option<String>,
  },

  /// Delete a product
  Delete {
    id: EntityId,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
  },
}

type Categorias = CategoriaManager<HttpEntityService<Categoria>>;
type Productos = ProductoManager<HttpEntityService<Producto>, HttpEntityService<Categoria>>;

fn main() -> Result<()> {
  if let Err(e) = fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .try_init()
  {
    eprintln!("tracing init failed: {}", e);
  }

  let cli = Cli::parse();
  let config = load_config(cli.config, cli.api_url)?;
  let api = ApiClient::new(&config).context("failed to create API client")?;

  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async {
    match cli.command {
      Commands::Categorias { action } => run_categorias(&api, action).await,
      Commands::Productos { action } => run_productos(&api, action).await,
    }
  })
}

fn load_config(path: Option<PathBuf>, api_url: Option<String>) -> Result<ApiConfig> {
  let config = match path {
    Some(path) => ApiConfig::load(&path)
      .with_context(|| format!("failed to load config file: {}", path.display()))?,
    None => ApiConfig::default(),
  };

  Ok(match api_url {
    Some(url) => config.with_base_url(url),
    None => config,
  })
}

/// Ask on stderr and read the answer from stdin. Only "y" or "yes" confirm.
fn prompt_confirm(message: &str) -> bool {
  let answer = (|| -> io::Result<String> {
    eprint!("{} [y/N]: ", message);
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer)
  })();

  match answer {
    Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
    Err(e) => {
      warn!(error = %e, "confirm_prompt_failed");
      false
    }
  }
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
  if yes {
    Box::new(AssumeYes)
  } else {
    Box::new(prompt_confirm)
  }
}

async fn run_categorias(api: &ApiClient, action: CategoriaAction) -> Result<()> {
  let mut manager = CategoriaManager::mount(api.categorias()).await;
  ensure_loaded(manager.load_state(), manager.error())?;

  match action {
    CategoriaAction::List => {}
    CategoriaAction::Create { nombre } => {
      manager.open_new();
      manager.set_nombre(nombre);
      submit_categoria(&mut manager).await?;
    }
    CategoriaAction::Edit { id, nombre } => {
      if !manager.edit_by_id(id) {
        bail!("category {} not found", id);
      }
      manager.set_nombre(nombre);
      submit_categoria(&mut manager).await?;
    }
    CategoriaAction::Delete { id, yes } => {
      match manager.delete(id, confirmer(yes).as_ref()).await {
        DeleteOutcome::Cancelled => {
          eprintln!("Delete cancelled");
          return Ok(());
        }
        DeleteOutcome::Deleted(id) => eprintln!("Deleted category {}", id),
        DeleteOutcome::Failed => bail!(session_error(manager.error())),
      }
    }
  }

  ensure_loaded(manager.load_state(), manager.error())?;
  render::categorias(&mut io::stdout().lock(), manager.categorias())?;
  Ok(())
}

async fn submit_categoria(manager: &mut Categorias) -> Result<()> {
  match manager.submit().await {
    SubmitOutcome::Invalid => {
      eprintln!("Invalid category:");
      render::field_errors(&mut io::stderr().lock(), manager.form().errors())?;
      bail!("validation failed");
    }
    SubmitOutcome::Failed => bail!(session_error(manager.error())),
    SubmitOutcome::Created(id) => eprintln!("Created category {}", id),
    SubmitOutcome::Updated(id) => eprintln!("Updated category {}", id),
  }
  Ok(())
}

async fn run_productos(api: &ApiClient, action: ProductoAction) -> Result<()> {
  if let ProductoAction::Show { id } = action {
    return show_producto(api, id).await;
  }

  let mut manager = ProductoManager::mount(api.productos(), api.categorias()).await;
  ensure_loaded(manager.load_state(), manager.error())?;

  match action {
    ProductoAction::List | ProductoAction::Show { .. } => {}
    ProductoAction::Create {
      nombre,
      precio,
      categoria_id,
    } => {
      manager.open_new();
      manager.set_nombre(nombre);
      manager.set_precio(precio);
      manager.set_categoria_id(categoria_id);
      submit_producto(&mut manager).await?;
    }
    ProductoAction::Edit {
      id,
      nombre,
      precio,
      categoria_id,
    } => {
      if !manager.edit_by_id(id) {
        bail!("product {} not found", id);
      }
      if let Some(nombre) = nombre {
        manager.set_nombre(nombre);
      }
      if let Some(precio) = precio {
        manager.set_precio(precio);
      }
      if let Some(categoria_id) = categoria_id {
        manager.set_categoria_id(categoria_id);
      }
      submit_producto(&mut manager).await?;
    }
    ProductoAction::Delete { id, yes } => {
      match manager.delete(id, confirmer(yes).as_ref()).await {
        DeleteOutcome::Cancelled => {
          eprintln!("Delete cancelled");
          return Ok(());
        }
        DeleteOutcome::Deleted(id) => eprintln!("Deleted product {}", id),
        DeleteOutcome::Failed => bail!(session_error(manager.error())),
      }
    }
  }

  ensure_loaded(manager.load_state(), manager.error())?;
  render::productos(
    &mut io::stdout().lock(),
    &manager.rows(),
    manager.orphan_warning(),
  )?;
  Ok(())
}

async fn submit_producto(manager: &mut Productos) -> Result<()> {
  match manager.submit().await {
    SubmitOutcome::Invalid => {
      eprintln!("Invalid product:");
      render::field_errors(&mut io::stderr().lock(), manager.form().errors())?;
      if manager.form().errors().get(Field::CategoriaId).is_some() {
        render::categoria_options(&mut io::stderr().lock(), &manager.categoria_options())?;
      }
      bail!("validation failed");
    }
    SubmitOutcome::Failed => bail!(session_error(manager.error())),
    SubmitOutcome::Created(id) => eprintln!("Created product {}", id),
    SubmitOutcome::Updated(id) => eprintln!("Updated product {}", id),
  }
  Ok(())
}

async fn show_producto(api: &ApiClient, id: EntityId) -> Result<()> {
  let detalle = api
    .productos()
    .get_detalle(id)
    .await
    .with_context(|| format!("failed to fetch product {}", id))?;

  let categoria = match (&detalle.categoria, detalle.producto.categoria_id) {
    (Some(categoria), _) => CategoriaRef::Resolved(categoria),
    (None, Some(categoria_id)) => CategoriaRef::Missing(categoria_id),
    (None, None) => CategoriaRef::Unassigned,
  };

  render::detalle(&mut io::stdout().lock(), &detalle, &categoria.to_string())?;
  Ok(())
}

fn ensure_loaded(state: LoadState, error: Option<&str>) -> Result<()> {
  if state == LoadState::Failed {
    bail!(session_error(error));
  }
  Ok(())
}

fn session_error(error: Option<&str>) -> String {
  error.unwrap_or("request failed").to_string()
}
