//! Render functions for the synthesized project files
//!
//! Each generated file has one function that takes the answer-derived values
//! it needs and returns the exact literal content. The JSON documents are
//! serialized from typed records so field names, nesting, and order match
//! what the framework's tooling expects, byte for byte (2-space pretty
//! printing, same as `JSON.stringify(value, null, 2)`).

use serde::Serialize;

// ---------------------------------------------------------------------------
// config.json - placeholder credentials the user fills in after generation
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BotSection {
    token: &'static str,
    id: &'static str,
    admins: Vec<&'static str>,
    owner_id: &'static str,
    developer_commands_server_ids: Vec<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DatabaseSection {
    mongodb_url: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoggingSection {
    guild_join_logs_id: &'static str,
    guild_leave_logs_id: &'static str,
    command_logs_channel_id: &'static str,
    error_logs: &'static str,
}

#[derive(Serialize)]
struct PrefixSection {
    value: &'static str,
}

#[derive(Serialize)]
struct BotConfig {
    bot: BotSection,
    database: DatabaseSection,
    logging: LoggingSection,
    prefix: PrefixSection,
}

/// Render `config.json`. Every value is a literal placeholder string - never
/// a real secret.
pub fn render_config() -> String {
    let config = BotConfig {
        bot: BotSection {
            token: "YOUR_BOT_TOKEN_HERE",
            id: "YOUR_BOT_ID_HERE",
            admins: vec!["ADMIN_USER_ID_1", "ADMIN_USER_ID_2"],
            owner_id: "YOUR_OWNER_ID_HERE",
            developer_commands_server_ids: vec!["DEV_SERVER_ID_1"],
        },
        database: DatabaseSection {
            mongodb_url: "YOUR_MONGODB_URL_HERE",
        },
        logging: LoggingSection {
            guild_join_logs_id: "GUILD_JOIN_LOGS_CHANNEL_ID",
            guild_leave_logs_id: "GUILD_LEAVE_LOGS_CHANNEL_ID",
            command_logs_channel_id: "COMMAND_LOGS_CHANNEL_ID",
            error_logs: "YOUR_ERROR_WEBHOOK_URL_HERE",
        },
        prefix: PrefixSection { value: "!" },
    };
    serde_json::to_string_pretty(&config).expect("static config document serializes")
}

// ---------------------------------------------------------------------------
// discobase.json - framework settings with fixed defaults
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ToggleSection {
    enabled: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PresenceSection {
    enabled: bool,
    status: &'static str,
    interval: u32,
    #[serde(rename = "type")]
    activity_type: &'static str,
    names: Vec<&'static str>,
    // The "//_" keys are in-file documentation the framework ignores; they
    // ship verbatim so users editing the JSON see them next to the field.
    #[serde(rename = "//_streamingUrl_note")]
    streaming_url_note: &'static str,
    streaming_url: &'static str,
    #[serde(rename = "//_customState_note")]
    custom_state_note: &'static str,
    custom_state: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommandStatsSection {
    enabled: bool,
    track_usage: bool,
    track_servers: bool,
    track_users: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActivityTrackerSection {
    enabled: bool,
    ignored_paths: Vec<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameworkSettings {
    error_logging: ToggleSection,
    presence: PresenceSection,
    command_stats: CommandStatsSection,
    activity_tracker: ActivityTrackerSection,
}

/// Render `discobase.json` with the framework's default toggle groups.
pub fn render_framework_settings() -> String {
    let settings = FrameworkSettings {
        error_logging: ToggleSection { enabled: false },
        presence: PresenceSection {
            enabled: false,
            status: "dnd",
            interval: 10000,
            activity_type: "PLAYING",
            names: vec![
                "with DiscoBase",
                "with commands",
                "with your server",
                "DiscoBase v3.0",
            ],
            streaming_url_note: "!=! This is only for the STREAMING activity type !=!",
            streaming_url: "https://www.twitch.tv/example",
            custom_state_note: "!=! This is only for the CUSTOM activity type !=!",
            custom_state: "🚀 discobase!",
        },
        command_stats: CommandStatsSection {
            enabled: true,
            track_usage: true,
            track_servers: true,
            track_users: true,
        },
        activity_tracker: ActivityTrackerSection {
            enabled: true,
            ignored_paths: vec![
                "**/node_modules/**",
                ".git",
                ".gitignore",
                "discobase.json",
            ],
        },
    };
    serde_json::to_string_pretty(&settings).expect("static settings document serializes")
}

// ---------------------------------------------------------------------------
// Example command handlers - fixed literals
// ---------------------------------------------------------------------------

/// Content of `src/commands/Community/ping.js` (slash-style command).
pub const SLASH_COMMAND: &str = r#"//! This is a basic structure for a slash command in a discoBase using discord.js


const { SlashCommandBuilder, MessageFlags } = require('discord.js');

module.exports = {
    disabled: false,
    //! The 'data' property defines the slash command's structure using SlashCommandBuilder.
    data: new SlashCommandBuilder()
        //* Name of the slash command. In this case, the command will be '/ping'.
        .setName('ping')

        //* A short description of what the command does, shown when users type '/ping' in Discord.
        .setDescription('This is the ping command.'),

    //? Optional: Permissions that the bot requires to execute the command.
    //? botPermissions: ['SendMessages'], // Example: bot needs permission to send messages.

    //? Optional: Permissions that the user requires to use this command. Uncomment if needed.
    //? userPermissions: ['ManageMessages'], // Example: Only users with Manage Messages permission can use this command.

    //? Optional: Set this to true if only bot admins can use this command.
    //? adminOnly: true,

    //? Optional: Set this to true if only the bot owner can use this command.
    //? ownerOnly: true,

    //? Optional: Set this to true if only developers can use this command.
    //? devOnly: true, so if this true this slash command will only register for the server IDs you provided in config.json

    //? Optional: Cooldown period for the command in seconds to prevent spam.
    //? cooldown: 10,

    //? Optional: Useful for turning off buggy or incomplete commands without deleting the file.
    //? disabled: true,

    //? Optional: Only allow users with these role IDs to run this command
    //? requiredRoles: ['1400100100176478330', '987654321098765432'],

    //! The 'execute' function is where the main logic for the command is placed.
    async execute(interaction, client) {
        try {
            const ping = Date.now() - interaction.createdTimestamp;
            const latency = Math.abs(ping);
            const latencyFormatted = `${latency.toString().substring(0, 2)}ms`;
            const emoji = "⏱️";

            await interaction.reply({ content: `${emoji} Pong! Latency is ${latencyFormatted}!` });

        } catch (error) {
            console.error('An error occurred while executing the command:', error);
        }
    }
};

"#;

/// Content of `src/messages/Community/ping.js` (prefix-style command).
pub const PREFIX_COMMAND: &str = r#"//! This is a basic structure for a prefix command in a discoBase using discord.js

const { execute } = require("../../commands/Community/ping");

module.exports = {
    disabled: false,
    //* Required: Command name, used to trigger the command. Example: !ping
    name: "ping",

    //* Required: A brief description of what the command does, useful for help commands.
    description: "This is the ping command.",

    //* Optional: Aliases are alternative names for the command. Example: !p will also trigger the ping command.
    aliases: ['p'],

    //? Optional: Permissions that the bot requires to execute the command.
    //? botPermissions: ['SendMessages'], // Example: bot needs permission to send messages.

    //? Optional: Permissions that the user requires to use this command. Uncomment if needed.
    //? userPermissions: ['ManageMessages'], // Example: Only users with Manage Messages permission can use this command.

    //? Optional: Set this to true if only bot admins can use this command.
    //? adminOnly: true,

    //? Optional: Set this to true if only the bot owner can use this command.
    //? ownerOnly: true,

    //? Optional: Set this to true if only developers can use this command.
    //? devOnly: true, so if this true this slash command will only register for the server IDs you provided in config.json

    //? Optional: Cooldown period for the command in seconds to prevent spam.
    //? cooldown: 10,


    //? Optional: Useful for turning off buggy or incomplete commands without deleting the file.
    //? disabled: true,

    //? Optional: Only allow users with these role IDs to run this command
    //? requiredRoles: ['1400100100176478330', '987654321098765432'],

    // The run function is the main logic that gets executed when the command is called.
    async execute (message, client, args) {
        const ping = Date.now() - message.createdTimestamp;

        const latency = Math.abs(ping);
        const latencyFormatted = `${latency.toString().substring(0, 2)}ms`;
        const emoji = "⏱️";

        message.reply(`${emoji} Pong! Latency is ${latencyFormatted}!`);
    },
};

"#;

// ---------------------------------------------------------------------------
// src/index.js - entry point, branches textually on the dashboard toggle
// ---------------------------------------------------------------------------

/// Render `src/index.js`. When the dashboard was requested, two extra wiring
/// sections and a localhost note are included; otherwise they are omitted.
/// Pure string composition - the written file never branches at runtime.
pub fn render_entry_point(include_dashboard: bool) -> String {
    let mut content = String::from(
        "const { DiscoBase } = require('discobase-core');\n\
         const { GatewayIntentBits } = require('discord.js');\n",
    );

    if include_dashboard {
        content.push_str("const path = require('path');\n");
    }

    content.push_str(
        r#"
// Create DiscoBase instance
const bot = new DiscoBase({
    // You can customize client options here
    clientOptions: {
        intents: [
            GatewayIntentBits.Guilds,
            GatewayIntentBits.GuildMembers,
            GatewayIntentBits.GuildMessages,
            GatewayIntentBits.MessageContent,
            GatewayIntentBits.DirectMessages
        ]
    }
});

// Access the Discord client if needed
const client = bot.getClient();

// Add custom client event listeners here if needed
// client.on('clientReady', () => {
//     console.log('Custom ready event!');
// });

// Start the bot
bot.start();
"#,
    );

    if include_dashboard {
        content.push_str(
            r#"
// Start the admin dashboard
client.once('clientReady', () => {
    const dashboardPath = path.join(__dirname, '../node_modules/discobase-core/admin/dashboard.js');
    require(dashboardPath)(client);
});
"#,
        );
        content.push_str(
            "\n// Note: Dashboard will be available at http://localhost:3000 when the bot is running\n",
        );
    }

    content
}

// ---------------------------------------------------------------------------
// package.json - project manifest
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ManifestScripts {
    start: &'static str,
    dev: &'static str,
    generate: &'static str,
    manage: &'static str,
}

#[derive(Serialize)]
struct ManifestDevDependencies {
    nodemon: &'static str,
}

#[derive(Serialize)]
struct Manifest {
    name: String,
    version: &'static str,
    description: &'static str,
    main: &'static str,
    scripts: ManifestScripts,
    keywords: Vec<&'static str>,
    author: &'static str,
    license: &'static str,
    #[serde(rename = "devDependencies")]
    dev_dependencies: ManifestDevDependencies,
}

/// Lower-case a project name and collapse every run of whitespace into a
/// single hyphen, producing a valid npm package name.
pub fn normalize_package_name(project_name: &str) -> String {
    let lower = project_name.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_whitespace = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
                in_whitespace = true;
            }
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Render `package.json` for the generated project.
pub fn render_manifest(project_name: &str) -> String {
    let manifest = Manifest {
        name: normalize_package_name(project_name),
        version: "1.0.0",
        description: "My Discord bot built with DiscoBase",
        main: "src/index.js",
        scripts: ManifestScripts {
            start: "node src/index.js",
            dev: "nodemon src/index.js",
            generate: "node node_modules/discobase-core/cli.js",
            manage: "node node_modules/discobase-core/manage.js",
        },
        keywords: vec!["discord", "bot"],
        author: "",
        license: "ISC",
        dev_dependencies: ManifestDevDependencies { nodemon: "^3.1.7" },
    };
    serde_json::to_string_pretty(&manifest).expect("manifest document serializes")
}

// ---------------------------------------------------------------------------
// README.md - setup guide
// ---------------------------------------------------------------------------

/// Render `README.md`. One configure bullet is included only when database
/// support was requested.
pub fn render_readme(project_name: &str, database_support: bool) -> String {
    let mut content = String::new();
    content.push_str("# ");
    content.push_str(project_name);
    content.push_str(
        r#"

Built with [DiscoBase](https://www.discobase.site) - A powerful Discord bot framework.

> **Note:** This project uses `discobase-core` package which contains the framework.

## Setup

1. Install dependencies:
```bash
npm install
```

2. Configure your bot:
   - Edit `config.json` with your bot token and settings
   - Customize `discobase.json` for framework settings
"#,
    );

    if database_support {
        content.push_str("   - Add your MongoDB URL in `config.json`\n");
    }

    content.push_str(
        r#"
3. Create your commands:
   - Slash commands in `src/commands/`
   - Prefix commands in `src/messages/`
   - Custom events in `src/events/`

4. Start your bot:
```bash
npm start
```

## Documentation

Visit [https://www.discobase.site](https://www.discobase.site) for full documentation.
"#,
    );

    content
}
