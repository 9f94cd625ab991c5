// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() {
    // Source tarballs have no repository; the version string then omits the SHA.
    if let Err(e) = EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()
    {
        println!("cargo:warning=commit-guard: git metadata unavailable: {e}");
    }
}
