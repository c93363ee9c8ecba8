/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static AFTER_HELP: &str = "COMMANDS:
    load <path> <name>                      Read a ppm, png or jpeg file
    save <path> <name>                      Write an image, format from the extension
    red-component <src> <dst>               Keep the red channel, likewise green/blue
    value-component <src> <dst> [clamp]     Sum of channels, likewise intensity/luma
    horizontal-flip <src> <dst>             Mirror left to right
    vertical-flip <src> <dst>               Mirror top to bottom
    brighten <delta> <src> <dst>            Add delta to every channel
    rgb-split <src> <r> <g> <b>             Split into three single channel images
    rgb-combine <dst> <r> <g> <b>           Combine channels of three images
    blur|sharpen <src> <dst> [split <p>]    Convolve with a built in kernel
    greyscale|sepia <src> <dst> [split <p>] Apply a color matrix
    color-correct <src> <dst> [split <p>]   Align histogram peaks
    levels-adjust <b> <m> <w> <src> <dst> [split <p>]
    compress <percent> <src> <dst>          Haar wavelet compression
    histogram <src> <dst>                   Plot histograms as an image
    info <name>                             Print a JSON summary
    run <script>                            Run commands from a file

Lines starting with # are comments, quit or exit stops reading.";
