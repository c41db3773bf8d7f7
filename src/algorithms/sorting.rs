//! The seven sort algorithms under comparison.
//!
//! Every function sorts the given slice in ascending order, in place, returning the number of
//! comparisons it made -- the "basic steps" used to derive the time per step in the reports.
//! What counts as a comparison differs from algorithm to algorithm (and is documented on each one),
//! but counts are always deterministic: the same input yields the same count.

use crate::array_utils::swap;


/// The partition-exchange sort (Quicksort), driven by an explicit stack of pending ranges instead of recursive calls.\
/// The pivot is the middle element of each range.\
/// Comparisons: for every range of 2 or more elements, its size minus one (`end - start`) is added once when the range
/// is taken and, again, one per element compared against the pivot during the partition scan.
pub fn partition_exchange_sort(array: &mut [i32]) -> u64 {
    let mut compares = 0;
    if array.len() < 2 {
        return compares;
    }
    // inclusive (start, end) ranges still to be partitioned
    let mut pending = vec![(0usize, array.len() - 1)];
    while let Some((start, end)) = pending.pop() {
        if start >= end {
            continue;
        }
        let pivot_point = partition(array, start, end, &mut compares);
        compares += (end - start) as u64;
        if pivot_point + 1 < end {
            pending.push((pivot_point + 1, end));
        }
        if pivot_point > start + 1 {
            pending.push((start, pivot_point - 1));
        }
    }
    compares
}

/// Arranges `array[start..=end]` in two sub lists around the middle element:
/// values less than the pivot go to its left; greater or equal, to its right.
/// Returns the final pivot position.
fn partition(array: &mut [i32], start: usize, end: usize, compares: &mut u64) -> usize {
    let mid = start + (end - start) / 2;
    swap(array, start, mid);
    let pivot_value = array[start];
    let mut end_of_left_list = start;
    for scan in start+1..=end {
        if array[scan] < pivot_value {
            end_of_left_list += 1;
            swap(array, end_of_left_list, scan);
        }
        *compares += 1;
    }
    swap(array, start, end_of_left_list);
    end_of_left_list
}

/// Selection sort: each position receives the minimum of the remaining elements.\
/// Comparisons: one per element examined while looking for the minimum -- always `n*(n-1)/2`.
pub fn selection_sort(array: &mut [i32]) -> u64 {
    let mut compares = 0;
    let len = array.len();
    for start_scan in 0..len.saturating_sub(1) {
        let mut min_index = start_scan;
        let mut min_value = array[start_scan];
        for index in start_scan+1..len {
            if array[index] < min_value {
                min_value = array[index];
                min_index = index;
            }
            compares += 1;
        }
        array[min_index] = array[start_scan];
        array[start_scan] = min_value;
    }
    compares
}

/// Insertion sort: each element is shifted left past every greater predecessor.\
/// Comparisons: one per shift, plus one per outer iteration (the test that stops the shifting)
/// -- so an already sorted array costs exactly `n-1`.
pub fn insertion_sort(array: &mut [i32]) -> u64 {
    let mut compares = 0;
    for index in 1..array.len() {
        let unsorted_value = array[index];
        let mut scan = index;
        while scan > 0 && array[scan - 1] > unsorted_value {
            array[scan] = array[scan - 1];
            scan -= 1;
            compares += 1;
        }
        compares += 1;
        array[scan] = unsorted_value;
    }
    compares
}

/// Merge sort, splitting recursively at the middle & merging through a working array allocated once for the whole run.\
/// Comparisons: one for each recursive call into a half (two per split) and one per element placed by the merge --
/// including the leftovers of the left half (leftovers of the right half are already in place).
pub fn merge_sort(array: &mut [i32]) -> u64 {
    if array.len() < 2 {
        return 0;
    }
    let mut working_array = vec![0; array.len()];
    let higher_index = array.len() - 1;
    merge_sort_range(array, &mut working_array, 0, higher_index)
}

fn merge_sort_range(array: &mut [i32], working_array: &mut [i32], lower_index: usize, higher_index: usize) -> u64 {
    if lower_index >= higher_index {
        return 0;
    }
    let middle = lower_index + (higher_index - lower_index) / 2;
    let mut compares = 2;
    compares += merge_sort_range(array, working_array, lower_index, middle);
    compares += merge_sort_range(array, working_array, middle + 1, higher_index);
    compares + merge(array, working_array, lower_index, middle, higher_index)
}

/// Merges the sorted `array[lower_index..=middle]` & `array[middle+1..=higher_index]`
fn merge(array: &mut [i32], working_array: &mut [i32], lower_index: usize, middle: usize, higher_index: usize) -> u64 {
    let mut compares = 0;
    working_array[lower_index..=higher_index].copy_from_slice(&array[lower_index..=higher_index]);
    let mut i1 = lower_index;
    let mut i2 = middle + 1;
    let mut new_index = lower_index;
    while i1 <= middle && i2 <= higher_index {
        if working_array[i1] <= working_array[i2] {
            array[new_index] = working_array[i1];
            i1 += 1;
        } else {
            array[new_index] = working_array[i2];
            i2 += 1;
        }
        compares += 1;
        new_index += 1;
    }
    while i1 <= middle {
        array[new_index] = working_array[i1];
        new_index += 1;
        i1 += 1;
        compares += 1;
    }
    compares
}

/// Bubble sort with no early exit: every pass runs even if the array is already sorted.\
/// Comparisons: one per adjacent pair compared -- always `n*(n-1)/2`.
pub fn bubble_sort(array: &mut [i32]) -> u64 {
    let mut compares = 0;
    for last_pos in (0..array.len()).rev() {
        for index in 0..last_pos {
            if array[index] > array[index + 1] {
                swap(array, index, index + 1);
            }
            compares += 1;
        }
    }
    compares
}

/// Shell sort (diminishing increment), halving the gap from `n/2` down to `1`.\
/// Comparisons: as in [insertion_sort()] -- one per shift plus one per outer iteration, on every gap.
pub fn gap_shift_sort(array: &mut [i32]) -> u64 {
    let mut compares = 0;
    let len = array.len();
    let mut gap = len / 2;
    while gap > 0 {
        for i in gap..len {
            let key = array[i];
            let mut j = i;
            while j >= gap && array[j - gap] > key {
                array[j] = array[j - gap];
                j -= gap;
                compares += 1;
            }
            compares += 1;
            array[j] = key;
        }
        gap /= 2;
    }
    compares
}

/// Counting sort by offset from the minimum: a frequency table of `max-min+1` entries is filled in and walked
/// to rewrite the array.\
/// Comparisons: two per element (after the first) while finding min & max, one per frequency increment and
/// one per element written back -- `4n-2` for any non-empty array.
pub fn counting_by_offset_sort(array: &mut [i32]) -> u64 {
    let mut compares = 0;
    let Some(&first) = array.first() else {
        return compares;
    };
    let mut min = first;
    let mut max = first;
    for &element in &array[1..] {
        if element < min {
            min = element;
        } else if element > max {
            max = element;
        }
        compares += 2;
    }
    let offset = |element: i32| (element as i64 - min as i64) as usize;
    let mut frequencies = vec![0usize; offset(max) + 1];
    for &element in array.iter() {
        frequencies[offset(element)] += 1;
        compares += 1;
    }
    let mut count = 0;
    for (i, &frequency) in frequencies.iter().enumerate() {
        let value = (i as i64 + min as i64) as i32;
        for _ in 0..frequency {
            array[count] = value;
            count += 1;
            compares += 1;
        }
    }
    compares
}
