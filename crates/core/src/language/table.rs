//! 組み込みの拡張子テーブル

/// 1つの言語グループのコメント記号
#[derive(Debug, Clone, Copy)]
pub struct LanguageEntry {
    pub extensions: &'static [&'static str],
    pub single: Option<&'static str>,
    pub multi: Option<(&'static str, &'static str)>,
}

const fn entry(
    extensions: &'static [&'static str],
    single: Option<&'static str>,
    multi: Option<(&'static str, &'static str)>,
) -> LanguageEntry {
    LanguageEntry {
        extensions,
        single,
        multi,
    }
}

pub static LANGUAGES: &[LanguageEntry] = &[
    // C系言語 (// と /* */)
    entry(
        &[
            "c", "h", "cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx", "h++", "cs", "java", "js",
            "mjs", "cjs", "jsx", "ts", "tsx", "mts", "cts", "rs", "go", "swift", "kt", "kts",
            "scala", "sc", "dart", "v", "sv", "svh", "zig", "m", "mm", "groovy", "gradle",
            "scss", "less", "jsonc", "proto", "thrift", "sol", "d",
        ],
        Some("//"),
        Some(("/*", "*/")),
    ),
    // CSS (/* */ のみ)
    entry(&["css"], None, Some(("/*", "*/"))),
    // PHP (//, /* */) - # は単一行記号を1つしか持てないため対象外
    entry(&["php"], Some("//"), Some(("/*", "*/"))),
    // Python (#) - docstring は開始と終了が同じ記号のため扱わない
    entry(&["py", "pyw", "pyi"], Some("#"), None),
    // Ruby: # と =begin/=end
    entry(&["rb", "rake", "gemspec"], Some("#"), Some(("=begin", "=end"))),
    // Perl: # と POD
    entry(&["pl", "pm", "perl"], Some("#"), Some(("=pod", "=cut"))),
    // 単純な Hash スタイル (#)
    entry(
        &[
            "sh", "bash", "zsh", "fish", "yml", "yaml", "toml", "dockerfile", "makefile", "mk",
            "cmake", "nim", "ex", "exs", "coffee", "tcl", "awk", "sed", "tf", "tfvars", "r",
            "ini", "conf", "cfg", "properties", "graphql", "gql", "nix", "gitignore",
        ],
        Some("#"),
        None,
    ),
    // PowerShell (# と <# #>)
    entry(&["ps1", "psm1", "psd1"], Some("#"), Some(("<#", "#>"))),
    // Lua (--) - 単一行記号で始まるブロック記号は行頭判定で隠れるため登録しない
    entry(&["lua"], Some("--"), None),
    // HTML/XML (<!-- -->)
    entry(
        &["html", "htm", "xhtml", "xml", "xsl", "xslt", "xsd", "svg", "vue", "md"],
        None,
        Some(("<!--", "-->")),
    ),
    // SQL (-- と /* */)
    entry(&["sql"], Some("--"), Some(("/*", "*/"))),
    // Haskell (-- と {- -})
    entry(&["hs", "lhs", "elm", "purs"], Some("--"), Some(("{-", "-}"))),
    // Julia (#)
    entry(&["jl"], Some("#"), None),
    // OCaml/F#/Pascal (* *)
    entry(&["ml", "mli", "sml", "pas", "pp", "dpr"], None, Some(("(*", "*)"))),
    entry(&["fs", "fsi", "fsx"], Some("//"), Some(("(*", "*)"))),
    // Lisp系 (;)
    entry(
        &["lisp", "lsp", "cl", "el", "clj", "cljs", "cljc", "edn", "scm", "ss", "rkt"],
        Some(";"),
        None,
    ),
    // Erlang / LaTeX (%)
    entry(&["erl", "hrl", "tex", "sty", "bib", "ltx"], Some("%"), None),
    // MATLAB (%)
    entry(&["mat", "mlx", "oct"], Some("%"), None),
    // Fortran (!)
    entry(&["f90", "f95", "f03", "f08"], Some("!"), None),
    // Batch (REM)
    entry(&["bat", "cmd"], Some("REM"), None),
    // Assembly (;)
    entry(&["asm", "nasm", "masm", "inc"], Some(";"), None),
    // GAS/AT&T Assembly (# と /* */)
    entry(&["s"], Some("#"), Some(("/*", "*/"))),
    // VHDL (--)
    entry(&["vhd", "vhdl"], Some("--"), None),
    // Visual Basic (')
    entry(&["vb", "vbs", "bas"], Some("'"), None),
];

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn test_extensions_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for language in LANGUAGES {
            for ext in language.extensions {
                assert_eq!(*ext, ext.to_ascii_lowercase().as_str());
                assert!(seen.insert(*ext), "duplicate extension: {ext}");
            }
        }
    }

    #[test]
    fn test_every_entry_has_a_symbol() {
        for language in LANGUAGES {
            assert!(language.single.is_some() || language.multi.is_some());
        }
    }
}
