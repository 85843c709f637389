//! Static documents: license text and the generated usage guide

use anyhow::{bail, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

use crate::cli::GenTarget;
use crate::output;

const LICENSE: &str = "\
puck - Copyright (c) the puck authors

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
";

const HOWTOUSE: &str = "\
# How to use puck

puck scaffolds, runs, checks, and deletes small single-file projects.

## Create a project

    puck create <name> <language> [-n|--no-cheatsheet] [--git|--no-git] [--docker|--no-docker]

Languages: lua, python, c, cpp, rust, js, ts, html, css, go, java, assembly.
Aliases such as `py`, `c++`, `rs`, `typescript`, and `asm` are accepted.

Every project gets boilerplate that greets its author, a `.gitignore`, a
`README.md`, and a `puck.json` metadata file.

## Work with a project

    puck <name> b    build and run
    puck <name> s    check syntax
    puck <name> r    delete (asks first unless delete_force is set)
    puck <name>      build and run, when <name>/puck.json exists

Projects are looked up in the current directory first, then in the
installation directory (`$PUCK_HOME`).

## Configuration

    puck config

writes a commented default config to `$PUCK_CONFIG`, or to `puck/config`
under your platform config directory. Keys:

| Key | Default | Effect |
|-----|---------|--------|
| copy_cheatsheet | true | copy language cheatsheets into new projects |
| auto_venv | true | create `.venv` for new python projects |
| assembly_build | true | run assembly programs after linking |
| delete_force | false | delete without confirmation |
| init_git | false | `git init` new projects |
| init_docker | false | write a Dockerfile when the language has one |
| use_docker_run | false | build and run projects with a Dockerfile in docker |
| propagate_exit_code | false | exit with status 1 when an action fails |
| command_timeout | 0 | kill build, run, and check commands after N seconds |
| author | | name used in boilerplate instead of `git config user.name` |

## Output

`-v` shows progress, `-vv` shows every command run, `-q` prints errors only.
`RUST_LOG` overrides both.
";

/// Name of the file `--gen howtouse` writes
pub const HOWTOUSE_FILE: &str = "HOWTOUSE.md";

pub fn license() -> Result<()> {
    print!("{}", LICENSE);
    Ok(())
}

pub fn generate(target: GenTarget) -> Result<()> {
    match target {
        GenTarget::Howtouse => {
            let cwd = std::env::current_dir().context("Cannot read current directory")?;
            let cwd = Utf8PathBuf::from_path_buf(cwd)
                .map_err(|p| anyhow::anyhow!("Non UTF-8 path: {}", p.display()))?;
            let path = write_howtouse(&cwd)?;
            output::success(&format!("Wrote {}", path));
            Ok(())
        }
    }
}

/// Write the usage guide into `dir`, refusing to overwrite
fn write_howtouse(dir: &Utf8Path) -> Result<Utf8PathBuf> {
    let path = dir.join(HOWTOUSE_FILE);
    if path.exists() {
        bail!("{} already exists", path);
    }
    std::fs::write(&path, HOWTOUSE).with_context(|| format!("Failed to write {}", path))?;
    Ok(path)
}
