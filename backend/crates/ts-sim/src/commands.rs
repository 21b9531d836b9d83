//! Subcommands of `ts-sim` and their execution.
//!
//! Every command produces one JSON value that `main` prints.

use crate::{
    ApiClient, Dashboard, Monitor, Registration, SessionStore, SimError, SimResult, Simulator,
    TouristApi,
};

use ts_config::SimulationConfig;
use ts_core::map::ripple::RIPPLE_INTERVAL;
use ts_core::{HeatmapBounds, PathPoint, PathSelection, PathType};

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, Timelike};
use clap::Subcommand;
use log::{info, warn};
use serde_json::{Value, json};
use tokio::time::Instant;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account on the auth service
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        date_of_birth: String,
        #[arg(long = "aadhaar", default_value = "")]
        aadhaar_number: String,
        #[arg(long, default_value = "normal")]
        path_type: PathType,
    },

    /// Log in and remember the session for later commands
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// List the tourist ids available for simulation
    Ids,

    /// Walk the selected tourists along their paths until every path ends
    Simulate {
        /// Tourist to simulate, as `<id>|<normal|anomaly>` (repeatable)
        #[arg(long = "select", required = true)]
        selections: Vec<PathSelection>,

        /// Raise an SOS this many seconds after the start
        #[arg(long)]
        sos_after: Option<u64>,

        /// Tourist that raises the SOS (defaults to the first selection)
        #[arg(long, requires = "sos_after")]
        sos_tourist: Option<String>,
    },

    /// Raise an SOS for a tourist
    Sos {
        tourist_id: String,

        /// Latitude (defaults to the tourist's live position)
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude (defaults to the tourist's live position)
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// Resolve an SOS and mark the tourist safe
    ResolveSos { tourist_id: String },

    /// Show safety alerts and the overall safety score
    Alerts {
        /// Clear every alert after showing it
        #[arg(long)]
        clear: bool,
    },

    /// Poll live statuses and print the map state
    Dashboard {
        /// Number of status polls before printing
        #[arg(long, default_value_t = 1)]
        polls: u32,
    },

    /// Show the status history of a tourist
    Logs { tourist_id: String },

    /// Build the incident heatmap from every tourist's logs
    Heatmap {
        /// Spread each incident into a regional cloud
        #[arg(long)]
        regional: bool,
    },
}

/// What a command needs from the outside world.
pub struct CommandContext {
    pub client: Arc<ApiClient>,
    pub simulation: SimulationConfig,
    pub session: SessionStore,
}

impl CommandContext {
    fn api(&self) -> Arc<dyn TouristApi> {
        self.client.clone()
    }
}

pub async fn execute(command: Commands, ctx: &CommandContext) -> SimResult<Value> {
    match command {
        Commands::Register {
            username,
            phone,
            email,
            password,
            date_of_birth,
            aadhaar_number,
            path_type,
        } => {
            let registration = Registration {
                username,
                email,
                password,
                date_of_birth,
                aadhaar_number,
                phone,
                path_type,
            };
            register(ctx, &registration).await
        }
        Commands::Login { username, password } => login(ctx, &username, &password).await,
        Commands::Logout => {
            let cleared = ctx.session.clear()?;
            Ok(json!({ "logged_out": cleared }))
        }
        Commands::Ids => Ok(json!(ctx.client.tourist_ids().await?)),
        Commands::Simulate {
            selections,
            sos_after,
            sos_tourist,
        } => simulate(ctx, &selections, sos_after, sos_tourist).await,
        Commands::Sos {
            tourist_id,
            lat,
            lon,
        } => {
            let position = match lat.zip(lon) {
                Some((lat, lon)) => PathPoint::new(lat, lon),
                None => live_position(ctx, &tourist_id).await?,
            };
            ctx.client.send_sos(&tourist_id, position).await?;
            Ok(json!({
                "success": true,
                "message": format!("SOS sent for Tourist {}", tourist_id),
                "position": position,
            }))
        }
        Commands::ResolveSos { tourist_id } => resolve_sos(ctx, &tourist_id).await,
        Commands::Alerts { clear } => alerts(ctx, clear).await,
        Commands::Dashboard { polls } => dashboard(ctx, polls).await,
        Commands::Logs { tourist_id } => {
            let mut dashboard = Dashboard::new(ctx.api(), ctx.simulation.trail_length);
            let entries = dashboard.open_logs(&tourist_id).await?;
            Ok(json!(entries))
        }
        Commands::Heatmap { regional } => heatmap(ctx, regional).await,
    }
}

async fn register(ctx: &CommandContext, registration: &Registration) -> SimResult<Value> {
    let response = ctx.client.register(registration).await?;
    if !response.success {
        return Err(SimError::rejected(
            response
                .error
                .unwrap_or_else(|| String::from("Registration failed")),
        ));
    }

    Ok(json!({
        "success": true,
        "message": response
            .message
            .unwrap_or_else(|| String::from("Registration successful. Please login.")),
    }))
}

async fn login(ctx: &CommandContext, username: &str, password: &str) -> SimResult<Value> {
    let response = ctx.client.login(username, password).await?;

    match response.user {
        Some(user) if response.success => {
            ctx.session.save(&user)?;
            info!("Logged in as {}", user.username);
            Ok(json!({ "success": true, "user": user }))
        }
        _ => Err(SimError::rejected(
            response
                .error
                .unwrap_or_else(|| String::from("An error occurred")),
        )),
    }
}

async fn simulate(
    ctx: &CommandContext,
    selections: &[PathSelection],
    sos_after: Option<u64>,
    sos_tourist: Option<String>,
) -> SimResult<Value> {
    let session = match ctx.session.load() {
        Ok(session) => session,
        Err(e) => {
            warn!("Ignoring stored session: {}", e);
            None
        }
    };
    let username = session.as_ref().map(|s| s.username.as_str());

    let mut simulator = Simulator::new(ctx.api(), ctx.simulation.tick_interval());
    let mut monitor = Monitor::new(ctx.api());
    simulator.start_monitoring(selections, username).await?;

    let mut pending_sos = sos_after.and_then(|secs| {
        let tourist_id = sos_tourist.or_else(|| selections.first().map(|s| s.tourist_id.clone()))?;
        Some((Instant::now() + Duration::from_secs(secs), tourist_id))
    });

    let mut poll = tokio::time::interval(ctx.simulation.poll_interval());
    loop {
        tokio::select! {
            _ = poll.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, stopping simulations");
                simulator.stop_all().await;
                break;
            }
        }

        if let Some((at, tourist_id)) = pending_sos.take_if(|(at, _)| Instant::now() >= *at) {
            if let Err(e) = simulator.send_sos(&tourist_id).await {
                warn!("SOS for tourist {} scheduled at {:?} failed: {}", tourist_id, at, e);
            }
        }

        monitor.poll().await;
        let assessment = monitor.assessment(Local::now().hour());
        info!(
            "{} | safety score {} ({})",
            simulator.status(),
            assessment.score,
            assessment.rating.as_str()
        );

        if simulator.all_completed().await {
            break;
        }
    }
    simulator.wait().await;

    let hour = Local::now().hour();
    let simulations: Vec<Value> = simulator
        .snapshot()
        .await
        .into_iter()
        .map(|sim| {
            json!({
                "tourist_id": sim.tourist_id,
                "path_type": sim.path_type,
                "current_index": sim.current_index,
                "path_len": sim.path.len(),
                "state": sim.state,
            })
        })
        .collect();

    Ok(json!({
        "status": simulator.status(),
        "assessment": monitor.assessment(hour),
        "tourists": monitor.tourist_scores(&simulator.active_ids(), hour),
        "simulations": simulations,
    }))
}

async fn live_position(ctx: &CommandContext, tourist_id: &str) -> SimResult<PathPoint> {
    let statuses = ctx.client.live_statuses().await?;
    statuses
        .get(tourist_id)
        .map(|status| status.position())
        .ok_or_else(|| SimError::no_position(tourist_id))
}

async fn resolve_sos(ctx: &CommandContext, tourist_id: &str) -> SimResult<Value> {
    let mut dashboard = Dashboard::new(ctx.api(), ctx.simulation.trail_length);
    dashboard.poll_statuses().await;
    dashboard.refresh_logs(tourist_id).await;
    dashboard.resolve_sos(tourist_id).await?;

    Ok(json!({
        "success": true,
        "message": format!("SOS resolved for Tourist {}", tourist_id),
        "status": dashboard.statuses().get(tourist_id),
    }))
}

async fn alerts(ctx: &CommandContext, clear: bool) -> SimResult<Value> {
    let mut monitor = Monitor::new(ctx.api());
    monitor.poll().await;

    let hour = Local::now().hour();
    let output = json!({
        "alerts": monitor.alerts(),
        "assessment": monitor.assessment(hour),
        "cleared": clear,
    });

    if clear {
        monitor.clear_alerts().await?;
    }
    Ok(output)
}

async fn dashboard(ctx: &CommandContext, polls: u32) -> SimResult<Value> {
    let mut dashboard = Dashboard::new(ctx.api(), ctx.simulation.trail_length);
    let mut poll = tokio::time::interval(ctx.simulation.poll_interval());
    let mut ripple = tokio::time::interval(RIPPLE_INTERVAL);

    let mut done = 0;
    while done < polls {
        tokio::select! {
            _ = poll.tick() => {
                dashboard.poll_statuses().await;
                done += 1;
            }
            _ = ripple.tick() => dashboard.tick_ripples(),
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    let tourists: Vec<Value> = dashboard
        .markers()
        .into_iter()
        .map(|(id, marker)| {
            json!({
                "id": id,
                "status": dashboard.statuses().get(id),
                "marker": marker,
                "trail": dashboard.trails().trail(id),
                "ripples": dashboard.ripples().get(id).map(|field| field.ripples()),
            })
        })
        .collect();

    Ok(json!({
        "tourists": tourists,
        "error": dashboard.error(),
    }))
}

async fn heatmap(ctx: &CommandContext, regional: bool) -> SimResult<Value> {
    let mut dashboard = Dashboard::new(ctx.api(), ctx.simulation.trail_length);
    dashboard.poll_statuses().await;
    dashboard.refresh_heatmap().await;

    let points = if regional {
        dashboard.regional_heat_points(&mut rand::rng())
    } else {
        dashboard.heat_points()
    };

    Ok(json!({
        "count": points.len(),
        "bounds": HeatmapBounds::fit(&points),
        "points": points,
    }))
}
