//! Built-in cleanup table.
//!
//! Commonly-depended-on packages mapped to directories that are never needed at
//! runtime: test suites, documentation, build scripts and examples. Keys are
//! lower case and sorted.

use std::collections::BTreeMap;

/// Built-in package → paths table.
pub const DEFAULT_CLEANUP_PATHS: &[(&str, &[&str])] = &[
    ("behat/mink", &["tests", "driver-testsuite"]),
    ("behat/mink-browserkit-driver", &["tests"]),
    ("behat/mink-goutte-driver", &["tests"]),
    ("behat/mink-selenium2-driver", &["tests"]),
    ("brick/math", &["random-tests.php"]),
    ("composer/semver", &["tests"]),
    ("doctrine/annotations", &["docs"]),
    ("doctrine/instantiator", &["docs", "tests"]),
    ("doctrine/lexer", &["docs"]),
    ("easyrdf/easyrdf", &["scripts"]),
    ("egulias/email-validator", &["documentation", "tests"]),
    ("fabpot/goutte", &["Goutte/Tests"]),
    ("guzzlehttp/guzzle", &["docs", "tests"]),
    ("guzzlehttp/promises", &["tests"]),
    ("guzzlehttp/psr7", &["tests"]),
    ("instaclick/php-webdriver", &["doc", "test"]),
    ("justinrainbow/json-schema", &["demo"]),
    ("laminas/laminas-diactoros", &["docs"]),
    ("laminas/laminas-escaper", &["doc"]),
    ("laminas/laminas-feed", &["doc"]),
    ("laminas/laminas-stdlib", &["doc"]),
    ("masterminds/html5", &["bin", "test"]),
    ("mikey179/vfsstream", &["src/test"]),
    ("myclabs/deep-copy", &["doc"]),
    ("pear/archive_tar", &["docs", "tests"]),
    ("pear/console_getopt", &["tests"]),
    ("pear/pear-core-minimal", &["tests"]),
    ("pear/pear_exception", &["tests"]),
    ("phar-io/manifest", &["examples", "tests"]),
    ("phar-io/version", &["tests"]),
    ("phpdocumentor/reflection-docblock", &["tests"]),
    ("phpspec/prophecy", &["fixtures", "spec", "tests"]),
    ("phpunit/php-code-coverage", &["tests"]),
    ("phpunit/php-timer", &["tests"]),
    ("phpunit/php-token-stream", &["tests"]),
    ("phpunit/phpunit", &["tests"]),
    ("sebastian/code-unit-reverse-lookup", &["tests"]),
    ("sebastian/comparator", &["tests"]),
    ("sebastian/diff", &["tests"]),
    ("sebastian/environment", &["tests"]),
    ("sebastian/exporter", &["tests"]),
    ("sebastian/global-state", &["tests"]),
    ("sebastian/object-enumerator", &["tests"]),
    ("sebastian/object-reflector", &["tests"]),
    ("sebastian/recursion-context", &["tests"]),
    ("seld/jsonlint", &["tests"]),
    ("squizlabs/php_codesniffer", &["tests"]),
    ("stack/builder", &["tests"]),
    ("symfony-cmf/routing", &["Test", "Tests"]),
    ("symfony/browser-kit", &["Tests"]),
    ("symfony/console", &["Tests"]),
    ("symfony/css-selector", &["Tests"]),
    ("symfony/debug", &["Tests"]),
    ("symfony/dependency-injection", &["Tests"]),
    ("symfony/dom-crawler", &["Tests"]),
    ("symfony/error-handler", &["Tests"]),
    ("symfony/event-dispatcher", &["Tests"]),
    ("symfony/filesystem", &["Tests"]),
    ("symfony/finder", &["Tests"]),
    ("symfony/http-foundation", &["Tests"]),
    ("symfony/http-kernel", &["Tests"]),
    ("symfony/mime", &["Tests"]),
    ("symfony/phpunit-bridge", &["Tests"]),
    ("symfony/process", &["Tests"]),
    ("symfony/psr-http-message-bridge", &["Tests"]),
    ("symfony/routing", &["Tests"]),
    ("symfony/serializer", &["Tests"]),
    ("symfony/translation", &["Tests"]),
    ("symfony/validator", &["Tests"]),
    ("symfony/var-dumper", &["Tests"]),
    ("symfony/yaml", &["Tests"]),
    ("theseer/tokenizer", &["tests"]),
    ("twig/twig", &["doc", "ext", "test", "tests"]),
];

/// The built-in table as an owned, ordered map.
#[must_use]
pub fn default_cleanup_paths() -> BTreeMap<String, Vec<String>> {
    DEFAULT_CLEANUP_PATHS
        .iter()
        .map(|(package, paths)| {
            ((*package).to_string(), paths.iter().map(|path| (*path).to_string()).collect())
        })
        .collect()
}
