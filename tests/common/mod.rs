// tests/common/mod.rs

//! Shared PKGBUILD fixtures for integration tests.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// A single-package PKGBUILD in the style of the Arch repositories.
pub const NANO_PKGBUILD: &str = r#"# Maintainer: Jane Doe <jane@example.com>
# Contributor: John Doe <john@example.com>

pkgname=nano
pkgver=8.5
pkgrel=2
pkgdesc="A small and friendly text editor (pico clone)"
url="https://www.nano-editor.org"
arch=('x86_64' 'aarch64')
license=('GPL-3.0-or-later')
depends=('ncurses' 'file' 'sh')
makedepends=(git autoconf)
optdepends=('bash-completion: tab completion for nano'
            'python: syntax highlighting helpers')
backup=('etc/nanorc')
source=("https://www.nano-editor.org/dist/v8/nano-$pkgver.tar.xz"
        "https://www.nano-editor.org/dist/v8/nano-$pkgver.tar.xz.asc")
sha256sums=('5d3b8c6a0a0bb0c8fb2b2e1a1b0a0a6e7f1d8f4b1e5d2f6c7a8b9c0d1e2f3a4b'
            'SKIP')

prepare() {
  cd "$pkgname-$pkgver"
  autoreconf -fi
}

build() {
  cd "$pkgname-$pkgver"
  ./configure --prefix=/usr \
    --sysconfdir=/etc \
    --enable-utf8
  make
}

check() {
  cd "$pkgname-$pkgver"
  make check
}

package() {
  cd "$pkgname-$pkgver"
  make DESTDIR="$pkgdir" install
  install -DTm644 doc/sample.nanorc "$pkgdir"/etc/nanorc
}
"#;

/// A split PKGBUILD with two package_<name>() blocks.
pub const SPLIT_PKGBUILD: &str = r#"# Maintainer: Jane Doe <jane@example.com>
pkgbase=libfoo
pkgname=('libfoo' 'libfoo-docs')
pkgver=2.1.0
pkgrel=1
pkgdesc="Foo support library"
arch=('x86_64')
license=('MIT')
makedepends=('meson' 'doxygen')
source=("https://example.com/libfoo-$pkgver.tar.gz")
b2sums=('SKIP')

pkgver() {
  cd libfoo
  git describe --tags | sed 's/^v//'
}

build() {
  meson setup build libfoo
  meson compile -C build
}

package_libfoo() {
  depends=('glibc' 'zlib')
  optdepends=('libfoo-docs: API documentation')
  meson install -C build --destdir "$pkgdir"
}

package_libfoo-docs() {
  pkgdesc="Documentation for libfoo"
  arch=('any')
  install -d "${pkgdir}/usr/share/doc"
}
"#;

/// Write content to a temporary file named like a PKGBUILD.
///
/// Keep the returned handle alive for as long as the path is used.
pub fn write_temp(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("PKGBUILD")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
