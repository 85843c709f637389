//! Language registry
//!
//! Static table of every supported language. Command templates are argument
//! vectors; `{source}`, `{dir}`, and `{name}` are substituted at run time.

use super::{
    BuildRecipe, CheckCommand, Cheatsheet, Language, LanguageDescriptor, Scaffold, Signature,
    TemplateFile, Toolchain,
};
use crate::render::Quoting;

/// Static registry of all supported languages
pub static LANGUAGES: &[LanguageDescriptor] = &[
    // ==========================================================================
    // Scripting
    // ==========================================================================
    LanguageDescriptor {
        language: Language::Lua,
        name: "Lua",
        signatures: &[Signature::File("main.lua")],
        sources: &["main.lua"],
        scaffold: Scaffold::Direct,
        files: &[TemplateFile {
            path: "main.lua",
            content: "local function main()\n    print(\"Hello, {author}\")\nend\n\nmain()\n",
            quoting: Quoting::Literal,
        }],
        build: BuildRecipe {
            toolchains: &[
                Toolchain {
                    tool: "luajit",
                    steps: &[&["luajit", "{source}"]],
                },
                Toolchain {
                    tool: "lua",
                    steps: &[&["lua", "{source}"]],
                },
            ],
            output_dir: None,
            run: None,
            remedy: None,
            hint: "Install Lua from https://www.lua.org/download.html",
        },
        check: Some(CheckCommand {
            tool: "luac",
            args: &["-p", "{source}"],
            hint: "Install the Lua compiler (luac) from https://www.lua.org/download.html",
        }),
        gitignore: Some("luac.out\n*.luac\n"),
        docker: None,
        cheatsheet: Cheatsheet::Single("luacheatsheet.pdf"),
    },
    LanguageDescriptor {
        language: Language::Python,
        name: "Python",
        signatures: &[Signature::File("main.py")],
        sources: &["main.py"],
        scaffold: Scaffold::Direct,
        files: &[TemplateFile {
            path: "main.py",
            content: "def main():\n    print(\"Hello, {author}\")\n\n\nif __name__ == \"__main__\":\n    main()\n",
            quoting: Quoting::Literal,
        }],
        build: BuildRecipe {
            toolchains: &[
                Toolchain {
                    tool: ".venv/bin/python",
                    steps: &[&["{dir}/.venv/bin/python", "{source}"]],
                },
                Toolchain {
                    tool: "python3",
                    steps: &[&["python3", "{source}"]],
                },
                Toolchain {
                    tool: "python",
                    steps: &[&["python", "{source}"]],
                },
            ],
            output_dir: None,
            run: None,
            remedy: None,
            hint: "Install Python 3 from https://www.python.org/downloads/",
        },
        check: Some(CheckCommand {
            tool: "python3",
            args: &["-m", "py_compile", "{source}"],
            hint: "Install Python 3 from https://www.python.org/downloads/",
        }),
        gitignore: Some("__pycache__/\n*.pyc\n.venv/\n"),
        docker: Some(
            "FROM python:3.12-slim\nWORKDIR /app\nCOPY . .\nCMD [\"python\", \"main.py\"]\n",
        ),
        cheatsheet: Cheatsheet::Single("pythoncheatsheet.pdf"),
    },
    // ==========================================================================
    // Compiled
    // ==========================================================================
    LanguageDescriptor {
        language: Language::C,
        name: "C",
        signatures: &[Signature::File("src/main.c")],
        sources: &["src/main.c"],
        scaffold: Scaffold::Direct,
        files: &[TemplateFile {
            path: "src/main.c",
            content: "#include <stdio.h>\n\nint main(void) {\n    puts(\"Hello, {author}\");\n    return 0;\n}\n",
            quoting: Quoting::Literal,
        }],
        build: BuildRecipe {
            toolchains: &[
                Toolchain {
                    tool: "clang",
                    steps: &[&["clang", "-Wall", "-o", "build/main", "{source}"]],
                },
                Toolchain {
                    tool: "gcc",
                    steps: &[&["gcc", "-Wall", "-o", "build/main", "{source}"]],
                },
            ],
            output_dir: Some("build"),
            run: Some(&["{dir}/build/main"]),
            remedy: None,
            hint: "Install a C compiler (clang or gcc)",
        },
        check: Some(CheckCommand {
            tool: "gcc",
            args: &["-fsyntax-only", "{source}"],
            hint: "Install gcc",
        }),
        gitignore: Some("build/\n*.o\n"),
        docker: Some(
            "FROM gcc:13\nWORKDIR /app\nCOPY . .\nRUN mkdir -p build && gcc -o build/main src/main.c\nCMD [\"./build/main\"]\n",
        ),
        cheatsheet: Cheatsheet::Single("ccheatsheet.pdf"),
    },
    LanguageDescriptor {
        language: Language::Cpp,
        name: "C++",
        signatures: &[Signature::File("src/main.cpp")],
        sources: &["src/main.cpp"],
        scaffold: Scaffold::Direct,
        files: &[TemplateFile {
            path: "src/main.cpp",
            content: "#include <iostream>\n\nint main() {\n    std::cout << \"Hello, {author}\" << std::endl;\n    return 0;\n}\n",
            quoting: Quoting::Literal,
        }],
        build: BuildRecipe {
            toolchains: &[
                Toolchain {
                    tool: "clang++",
                    steps: &[&["clang++", "-Wall", "-o", "build/main", "{source}"]],
                },
                Toolchain {
                    tool: "g++",
                    steps: &[&["g++", "-Wall", "-o", "build/main", "{source}"]],
                },
            ],
            output_dir: Some("build"),
            run: Some(&["{dir}/build/main"]),
            remedy: None,
            hint: "Install a C++ compiler (clang++ or g++)",
        },
        check: Some(CheckCommand {
            tool: "g++",
            args: &["-fsyntax-only", "{source}"],
            hint: "Install g++",
        }),
        gitignore: Some("build/\n*.o\n"),
        docker: Some(
            "FROM gcc:13\nWORKDIR /app\nCOPY . .\nRUN mkdir -p build && g++ -o build/main src/main.cpp\nCMD [\"./build/main\"]\n",
        ),
        cheatsheet: Cheatsheet::Single("cppcheatsheet.pdf"),
    },
    LanguageDescriptor {
        language: Language::Rust,
        name: "Rust",
        signatures: &[Signature::File("Cargo.toml")],
        sources: &["src/main.rs"],
        scaffold: Scaffold::Toolchain {
            init: &["cargo", "new", "--vcs", "none", "{name}"],
            entry: "src/main.rs",
        },
        files: &[TemplateFile {
            path: "src/main.rs",
            content: "fn main() {\n    let author = \"{author}\";\n    println!(\"Hello, {}\", author);\n}\n",
            quoting: Quoting::Literal,
        }],
        build: BuildRecipe {
            toolchains: &[Toolchain {
                tool: "cargo",
                steps: &[&["cargo", "run"]],
            }],
            output_dir: None,
            run: None,
            remedy: None,
            hint: "Install Rust with rustup: https://rustup.rs",
        },
        check: Some(CheckCommand {
            tool: "cargo",
            args: &["check"],
            hint: "Install Rust with rustup: https://rustup.rs",
        }),
        gitignore: Some("/target\n"),
        docker: Some(
            "FROM rust:1\nWORKDIR /app\nCOPY . .\nRUN cargo build --release\nCMD [\"./target/release/{name}\"]\n",
        ),
        cheatsheet: Cheatsheet::Single("rustcheatsheet.pdf"),
    },
    // ==========================================================================
    // JavaScript family
    // ==========================================================================
    LanguageDescriptor {
        language: Language::Js,
        name: "JavaScript",
        signatures: &[Signature::File("main.js")],
        sources: &["main.js"],
        scaffold: Scaffold::Direct,
        files: &[TemplateFile {
            path: "main.js",
            content: "function main() {\n  console.log(\"Hello, {author}\");\n}\n\nmain();\n",
            quoting: Quoting::Literal,
        }],
        build: BuildRecipe {
            toolchains: &[
                Toolchain {
                    tool: "bun",
                    steps: &[&["bun", "{source}"]],
                },
                Toolchain {
                    tool: "node",
                    steps: &[&["node", "{source}"]],
                },
            ],
            output_dir: None,
            run: None,
            remedy: None,
            hint: "Install Node.js from https://nodejs.org or Bun from https://bun.sh",
        },
        check: Some(CheckCommand {
            tool: "node",
            args: &["--check", "{source}"],
            hint: "Install Node.js from https://nodejs.org",
        }),
        gitignore: Some("node_modules/\n"),
        docker: Some(
            "FROM node:20-slim\nWORKDIR /app\nCOPY . .\nCMD [\"node\", \"main.js\"]\n",
        ),
        cheatsheet: Cheatsheet::Single("jscheatsheet.pdf"),
    },
    LanguageDescriptor {
        language: Language::Ts,
        name: "TypeScript",
        signatures: &[Signature::File("main.ts"), Signature::File("src/main.ts")],
        sources: &["main.ts", "src/main.ts"],
        scaffold: Scaffold::Direct,
        files: &[TemplateFile {
            path: "main.ts",
            content: "function greet(name: string): string {\n  return \"Hello, \" + name;\n}\n\nconsole.log(greet(\"{author}\"));\n",
            quoting: Quoting::Literal,
        }],
        build: BuildRecipe {
            toolchains: &[
                Toolchain {
                    tool: "bun",
                    steps: &[&["bun", "{source}"]],
                },
                Toolchain {
                    tool: "deno",
                    steps: &[&["deno", "run", "{source}"]],
                },
                Toolchain {
                    tool: "tsc",
                    steps: &[
                        &["tsc", "--outDir", "build", "{source}"],
                        &["node", "build/main.js"],
                    ],
                },
            ],
            output_dir: None,
            run: None,
            remedy: Some(&["npm", "install", "-g", "typescript"]),
            hint: "Install TypeScript with `npm install -g typescript`, or Bun from https://bun.sh",
        },
        check: Some(CheckCommand {
            tool: "tsc",
            args: &["--noEmit", "{source}"],
            hint: "Install TypeScript with `npm install -g typescript`",
        }),
        gitignore: Some("node_modules/\nbuild/\n"),
        docker: Some("FROM oven/bun:1\nWORKDIR /app\nCOPY . .\nCMD [\"bun\", \"main.ts\"]\n"),
        cheatsheet: Cheatsheet::Single("tscheatsheet.pdf"),
    },
    // ==========================================================================
    // Web
    // ==========================================================================
    LanguageDescriptor {
        language: Language::Html,
        name: "HTML",
        signatures: &[Signature::File("index.html")],
        sources: &["index.html"],
        scaffold: Scaffold::Direct,
        files: &[TemplateFile {
            path: "index.html",
            content: HTML_PAGE,
            quoting: Quoting::Markup,
        }],
        build: BuildRecipe {
            toolchains: OPEN_PAGE,
            output_dir: None,
            run: None,
            remedy: None,
            hint: "Open index.html in a browser (no xdg-open or open found)",
        },
        check: None,
        gitignore: None,
        docker: None,
        cheatsheet: Cheatsheet::Single("htmlcheatsheet.pdf"),
    },
    LanguageDescriptor {
        language: Language::Css,
        name: "CSS",
        signatures: &[Signature::File("style.css"), Signature::File("main.css")],
        sources: &["style.css", "main.css"],
        scaffold: Scaffold::Direct,
        files: &[
            TemplateFile {
                path: "style.css",
                content: "body {\n    font-family: sans-serif;\n    margin: 2rem;\n}\n\nh1 {\n    color: #2a7ae2;\n}\n",
                quoting: Quoting::Markup,
            },
            TemplateFile {
                path: "index.html",
                content: STYLED_PAGE,
                quoting: Quoting::Markup,
            },
        ],
        build: BuildRecipe {
            toolchains: OPEN_PAGE,
            output_dir: None,
            run: None,
            remedy: None,
            hint: "Open index.html in a browser (no xdg-open or open found)",
        },
        check: None,
        gitignore: None,
        docker: None,
        cheatsheet: Cheatsheet::Single("csscheatsheet.pdf"),
    },
    // ==========================================================================
    // Others
    // ==========================================================================
    LanguageDescriptor {
        language: Language::Go,
        name: "Go",
        signatures: &[Signature::File("main.go"), Signature::File("src/main.go")],
        sources: &["main.go", "src/main.go"],
        scaffold: Scaffold::Direct,
        files: &[TemplateFile {
            path: "main.go",
            content: "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"Hello, {author}\")\n}\n",
            quoting: Quoting::Literal,
        }],
        build: BuildRecipe {
            toolchains: &[Toolchain {
                tool: "go",
                steps: &[&["go", "run", "{source}"]],
            }],
            output_dir: None,
            run: None,
            remedy: None,
            hint: "Install Go from https://go.dev/dl/",
        },
        check: Some(CheckCommand {
            tool: "gofmt",
            args: &["-e", "-l", "{source}"],
            hint: "Install Go from https://go.dev/dl/",
        }),
        gitignore: Some("/main\n*.exe\n"),
        docker: Some(
            "FROM golang:1.22\nWORKDIR /app\nCOPY . .\nCMD [\"go\", \"run\", \"main.go\"]\n",
        ),
        cheatsheet: Cheatsheet::Single("gocheatsheet.pdf"),
    },
    LanguageDescriptor {
        language: Language::Java,
        name: "Java",
        signatures: &[Signature::Extension {
            dir: "src",
            ext: "java",
        }],
        sources: &["src/Main.java"],
        scaffold: Scaffold::Direct,
        files: &[TemplateFile {
            path: "src/Main.java",
            content: "public class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, {author}\");\n    }\n}\n",
            quoting: Quoting::Literal,
        }],
        build: BuildRecipe {
            toolchains: &[Toolchain {
                tool: "javac",
                steps: &[&["javac", "-d", "build", "{source}"]],
            }],
            output_dir: Some("build"),
            run: Some(&["java", "-cp", "build", "Main"]),
            remedy: None,
            hint: "Install a JDK, e.g. from https://adoptium.net",
        },
        check: Some(CheckCommand {
            tool: "javac",
            args: &["-d", "build", "{source}"],
            hint: "Install a JDK, e.g. from https://adoptium.net",
        }),
        gitignore: Some("build/\n*.class\n"),
        docker: Some(
            "FROM eclipse-temurin:21\nWORKDIR /app\nCOPY . .\nRUN javac -d build src/Main.java\nCMD [\"java\", \"-cp\", \"build\", \"Main\"]\n",
        ),
        cheatsheet: Cheatsheet::Single("javacheatsheet.pdf"),
    },
    LanguageDescriptor {
        language: Language::Assembly,
        name: "Assembly (x86-64 NASM)",
        signatures: &[Signature::File("src/main.asm")],
        sources: &["src/main.asm"],
        scaffold: Scaffold::Direct,
        files: &[TemplateFile {
            path: "src/main.asm",
            content: ASM_HELLO,
            quoting: Quoting::Plain,
        }],
        build: BuildRecipe {
            toolchains: &[Toolchain {
                tool: "nasm",
                steps: &[
                    &["nasm", "-f", "elf64", "-o", "build/main.o", "{source}"],
                    &["ld", "-o", "build/main", "build/main.o"],
                ],
            }],
            output_dir: Some("build"),
            run: Some(&["{dir}/build/main"]),
            remedy: None,
            hint: "Install nasm and binutils (ld)",
        },
        check: Some(CheckCommand {
            tool: "nasm",
            args: &["-f", "elf64", "-o", "/dev/null", "{source}"],
            hint: "Install nasm",
        }),
        gitignore: Some("build/\n*.o\n"),
        docker: None,
        cheatsheet: Cheatsheet::Prefixed("assemblycheatsheet"),
    },
];

/// Used when a language has no ignore template of its own
pub const GENERIC_GITIGNORE: &str = ".DS_Store\nThumbs.db\n*.log\n*.tmp\n";

const OPEN_PAGE: &[Toolchain] = &[
    Toolchain {
        tool: "xdg-open",
        steps: &[&["xdg-open", "index.html"]],
    },
    Toolchain {
        tool: "open",
        steps: &[&["open", "index.html"]],
    },
];

const HTML_PAGE: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"utf-8\">
    <title>{name}</title>
</head>
<body>
    <h1>Hello, {author}</h1>
</body>
</html>
";

const STYLED_PAGE: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"utf-8\">
    <title>{name}</title>
    <link rel=\"stylesheet\" href=\"style.css\">
</head>
<body>
    <h1>Hello, {author}</h1>
</body>
</html>
";

const ASM_HELLO: &str = "section .data
    msg db \"Hello, {author}\", 10
    len equ $ - msg

section .text
    global _start

_start:
    mov rax, 1
    mov rdi, 1
    mov rsi, msg
    mov rdx, len
    syscall

    mov rax, 60
    xor rdi, rdi
    syscall
";

/// Get the descriptor for a language
///
/// `LANGUAGES` is laid out in `Language` declaration order.
pub fn lookup(language: Language) -> &'static LanguageDescriptor {
    &LANGUAGES[language as usize]
}

/// Get the descriptor for a metadata identifier; `None` means no
/// builder or checker is configured for it
pub fn lookup_id(id: &str) -> Option<&'static LanguageDescriptor> {
    Language::from_id(id).map(lookup)
}
