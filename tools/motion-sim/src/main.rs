//! # Motion Sim
//!
//! 过渡模拟工具：不依赖任何渲染后端，按帧打印引擎输出。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p motion-sim -- list
//! cargo run -p motion-sim -- sample --motion shared-axis-x --step 50
//! cargo run -p motion-sim -- sample --motion fade-through --backward --json
//! cargo run -p motion-sim -- nav --config scenario.json --action push:profile --action pop
//! ```

mod scenario;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use motion_runtime::{
    Direction, FrameClock, LayerRole, LayerStyle, MotionKind, TransitionEngine, content_fn,
};
use serde::Serialize;
use tracing::Level;

use crate::scenario::{Action, Scenario};

#[derive(Parser)]
#[command(name = "motion-sim")]
#[command(about = "过渡模拟工具 - 按帧打印动效采样与导航场景")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 列出可用的动效
    List,

    /// 按固定步长采样一次过渡
    Sample {
        /// 动效名称（见 `list`）
        #[arg(short, long, default_value = "crossfade")]
        motion: MotionKind,

        /// 以后退方向播放
        #[arg(short, long)]
        backward: bool,

        /// 过渡时长（毫秒）
        #[arg(short, long, default_value_t = motion_runtime::DEFAULT_DURATION_MILLIS)]
        duration: u32,

        /// 采样步长（毫秒）
        #[arg(short, long, default_value_t = 50)]
        step: u64,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 运行导航场景
    Nav {
        /// 场景文件 (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// 依次执行的动作：`push:<route>`、`pop`、`deep_link:<uri>`、`wait:<ms>`
        #[arg(short, long = "action")]
        actions: Vec<Action>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::List => {
            list_motions();
            Ok(())
        }
        Commands::Sample {
            motion,
            backward,
            duration,
            step,
            json,
        } => sample(motion, Direction::from_pop(backward), duration, step, json),
        Commands::Nav { config, actions } => run_nav(&config, &actions),
    };

    if let Err(e) = result {
        eprintln!("❌ 模拟失败: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn list_motions() {
    for kind in MotionKind::ALL {
        println!("{kind}");
    }
}

/// 一个采样点
#[derive(Debug, Serialize)]
struct Sample {
    time_millis: u64,
    progress: f32,
    exit: Option<LayerStyle>,
    enter: Option<LayerStyle>,
}

fn sample(motion: MotionKind, direction: Direction, duration: u32, step: u64, json: bool) -> Result<()> {
    anyhow::ensure!(step > 0, "采样步长必须大于 0");

    let spec = motion.spec(duration);
    let mut engine = TransitionEngine::new();
    let mut content = content_fn(|_: &&str, style: &LayerStyle| *style);
    let mut clock = FrameClock::new().with_frame_interval(step);

    engine.run("old", &spec, direction, &mut content)?;
    let mut tree = engine.run("new", &spec, direction, &mut content)?;
    let mut samples = Vec::new();
    loop {
        let style_of = |role: LayerRole| {
            tree.layers
                .iter()
                .find(|layer| layer.role == role)
                .map(|layer| layer.content)
        };
        samples.push(Sample {
            time_millis: clock.now(),
            progress: engine.progress(),
            exit: style_of(LayerRole::Exiting),
            enter: style_of(LayerRole::Entering),
        });
        if !engine.is_running() {
            break;
        }
        engine.on_frame(clock.advance_frame(), &mut content);
        tree = engine.render(&mut content)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&samples)?);
        return Ok(());
    }

    println!(
        "🎞️  {motion} ({direction:?}, {} ms)",
        spec.duration_millis(direction)
    );
    for sample in &samples {
        println!(
            "{:>6} ms  p={:.3}  exit[{}]  enter[{}]",
            sample.time_millis,
            sample.progress,
            format_style(sample.exit.as_ref()),
            format_style(sample.enter.as_ref()),
        );
    }
    Ok(())
}

fn format_style(style: Option<&LayerStyle>) -> String {
    match style {
        Some(s) => format!(
            "a={:.2} x={:.1} y={:.1} s={:.3} e={:.2}",
            s.alpha, s.offset_x, s.offset_y, s.scale, s.elevation
        ),
        None => "-".to_string(),
    }
}

fn run_nav(config: &std::path::Path, actions: &[Action]) -> Result<()> {
    let scenario = Scenario::load(config)?;
    let mut host = scenario.build_host()?;
    let mut clock = FrameClock::new().with_frame_interval(scenario.host.frame_interval_millis);

    let tree = host.render()?;
    println!("▶ 初始: {}", scenario::describe_tree(&tree));
    println!("  返回栈: {}", scenario::describe_stack(host.controller()));

    for action in actions {
        println!("▶ {action}");
        match action {
            Action::Push(route) => host.navigate(route, Default::default())?,
            Action::Pop => {
                if !host.pop_back_stack() {
                    println!("  (返回栈只剩一个条目，忽略)");
                }
            }
            Action::DeepLink(uri) => host.controller_mut().handle_deep_link(uri)?,
            Action::Wait(millis) => {
                let until = clock.now() + millis;
                while clock.now() < until {
                    host.frame(clock.advance_frame())?;
                }
                continue;
            }
        }

        let mut tree = host.render()?;
        println!("{:>6} ms  {}", clock.now(), scenario::describe_tree(&tree));
        while host.is_transitioning() {
            tree = host.frame(clock.advance_frame())?;
            println!("{:>6} ms  {}", clock.now(), scenario::describe_tree(&tree));
        }
        println!("  返回栈: {}", scenario::describe_stack(host.controller()));
    }
    Ok(())
}
