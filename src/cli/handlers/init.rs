use std::fs;

use crate::cli::commands::InitArgs;
use crate::io::catalog_io::CATALOG_FILE;
use crate::io::progress_io::{self, PROGRESS_FILE};
use crate::model::progress::CompletionMap;

const STARTER_CATALOG: &str = r#"[
  {
    "id": "ranni",
    "npc": "Ranni the Witch",
    "location": "Three Sisters",
    "description": "Aid the witch in her long plan against the Order.",
    "category": "major",
    "steps": [
      {
        "id": "ranni-1",
        "title": "Meet Ranni at her rise",
        "description": "Visit the rise at night and accept her service."
      },
      {
        "id": "ranni-2",
        "title": "Recover the hidden treasure",
        "description": "Descend beneath the eternal city.",
        "note": "Easy to miss: the entrance opens only after the festival."
      }
    ]
  },
  {
    "id": "alex",
    "npc": "Alexander, Warrior Jar",
    "location": "Stormhill",
    "description": "Help the great jar on his road to the festival.",
    "category": "side",
    "steps": [
      {
        "id": "alex-1",
        "title": "Pull Alexander free",
        "description": "He is stuck in a hole off the main road."
      },
      {
        "id": "alex-2",
        "title": "Meet him at the festival",
        "description": "Duel him in the arena."
      }
    ]
  },
  {
    "id": "leda",
    "npc": "Needle Knight Leda",
    "location": "Gravesite Plain",
    "description": "Follow the guided ones into the shadow realm.",
    "category": "dlc",
    "steps": [
      {
        "id": "leda-1",
        "title": "Speak with Leda at the cross",
        "description": "She marks the path ahead.",
        "sequenceOrder": 0
      },
      {
        "id": "leda-2",
        "title": "Reach the scorched ruins",
        "description": "Continue along the pilgrim road.",
        "sequenceOrder": 1
      }
    ]
  }
]
"#;

/// `ql init`: write a starter catalog and an empty progress map into the
/// current directory.
pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::current_dir()?;
    let catalog_path = dir.join(CATALOG_FILE);

    if catalog_path.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            CATALOG_FILE
        )
        .into());
    }

    fs::write(&catalog_path, STARTER_CATALOG)?;
    // A fresh progress file is not strictly needed (missing means empty),
    // but writing it makes the directory self-describing.
    if !dir.join(PROGRESS_FILE).exists() || args.force {
        progress_io::save_progress(&dir, &CompletionMap::new())?;
    }

    println!("initialized questlog in {}", dir.display());
    println!("  {} — starter catalog, edit freely", CATALOG_FILE);
    println!("  {} — completion state, managed by ql", PROGRESS_FILE);
    Ok(())
}
