use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gridlock",
    about = "Gridlock: wait-for graph deadlock detection over declared process/resource models",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage declared processes
    Process {
        #[command(subcommand)]
        command: ProcessCommands,
    },

    /// Manage declared resources
    Resource {
        #[command(subcommand)]
        command: ResourceCommands,
    },

    /// Manage hold edges (process owns resource)
    Hold {
        #[command(subcommand)]
        command: HoldCommands,
    },

    /// Manage wait edges (process blocked on resource)
    Wait {
        #[command(subcommand)]
        command: WaitCommands,
    },

    /// List or load built-in example scenarios
    Scenario {
        #[command(subcommand)]
        command: ScenarioCommands,
    },

    /// Empty the whole model
    Reset {
        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the current model and its wait-for graph
    Show {
        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Derive the wait-for graph and run cycle detection
    Detect {
        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay the detection search step by step
    Trace {
        /// Show only the step at this 1-based index
        #[arg(long)]
        step: Option<usize>,

        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assemble the full analysis report
    Report {
        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum ProcessCommands {
    /// Declare a process
    Add {
        /// Process identifier
        name: String,

        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a process and detach every edge naming it
    Remove {
        /// Process identifier
        name: String,

        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum ResourceCommands {
    /// Declare a resource
    Add {
        /// Resource identifier
        name: String,

        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a resource and detach every edge naming it
    Remove {
        /// Resource identifier
        name: String,

        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum HoldCommands {
    /// Record that a process holds a resource
    Add {
        /// Holding process
        process: String,

        /// Held resource
        resource: String,

        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove one hold edge
    Remove {
        /// Holding process
        process: String,

        /// Held resource
        resource: String,

        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove every hold edge
    Clear {
        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum WaitCommands {
    /// Record that a process is waiting for a resource
    Add {
        /// Waiting process
        process: String,

        /// Awaited resource
        resource: String,

        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove one wait edge
    Remove {
        /// Waiting process
        process: String,

        /// Awaited resource
        resource: String,

        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove every wait edge
    Clear {
        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum ScenarioCommands {
    /// List available scenarios
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace the model file with a named scenario
    Load {
        /// Scenario name
        name: String,

        /// Path to the model JSON document
        #[arg(long, default_value = ".gridlock/model.json")]
        model: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
