/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Miscellaneous utilities.

/// Creates a [`rayon::ThreadPool`] for the loop-parallel kernel, sized by the
/// given number of threads or by rayon's default if no argument is provided.
///
/// # Examples
///
/// ```
/// use concomp::thread_pool;
///
/// let pool = thread_pool![]; // default number of threads
/// let pool = thread_pool![4]; // 4 threads
/// ```
#[macro_export]
macro_rules! thread_pool {
    () => {
        rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Could not build a default-sized relaxation pool")
    };
    ($num_threads:expr) => {
        rayon::ThreadPoolBuilder::new()
            .num_threads($num_threads)
            .build()
            .unwrap_or_else(|_| panic!("Could not build a relaxation pool of {} threads", $num_threads))
    };
}
