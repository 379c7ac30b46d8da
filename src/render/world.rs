//! Built-in world outlines used when no basemap raster is given.
//!
//! Coarse, hand-simplified `(longitude, latitude)` rings of the continents and
//! major islands, the larger inland waters, and a selection of international
//! land borders. Resolution is a degree or two, enough for a map a few
//! thousand pixels wide.

type Ring = &'static [(f64, f64)];

pub const LAND: &[Ring] = &[
    // North America
    &[
        (-166.0, 68.8), (-163.0, 70.3), (-156.5, 71.3), (-150.0, 70.4), (-141.0, 69.7),
        (-135.0, 69.2), (-128.0, 70.2), (-117.0, 68.9), (-108.0, 68.2), (-98.0, 68.0),
        (-94.0, 68.0), (-90.0, 68.5), (-82.0, 69.5), (-78.0, 64.0), (-78.0, 62.5),
        (-70.0, 61.0), (-65.0, 60.0), (-64.0, 58.0), (-61.5, 56.0), (-57.0, 53.0),
        (-56.0, 51.5), (-60.0, 50.2), (-66.0, 50.0), (-71.0, 46.8), (-64.5, 48.8),
        (-65.0, 46.5), (-60.5, 46.5), (-66.0, 43.5), (-70.0, 43.7), (-70.5, 41.7),
        (-74.0, 40.5), (-75.5, 38.5), (-76.0, 36.8), (-75.5, 35.2), (-77.5, 34.5),
        (-79.0, 33.0), (-81.0, 31.5), (-81.3, 30.0), (-80.0, 27.0), (-80.3, 25.2),
        (-81.7, 25.8), (-82.7, 28.0), (-84.0, 30.0), (-86.0, 30.4), (-89.0, 30.2),
        (-90.0, 29.0), (-94.0, 29.6), (-97.2, 27.8), (-97.5, 25.0), (-97.7, 22.0),
        (-97.0, 20.5), (-96.0, 19.0), (-94.5, 18.2), (-92.0, 18.6), (-91.0, 19.0),
        (-90.3, 21.0), (-87.0, 21.5), (-87.5, 19.0), (-88.3, 16.0), (-84.0, 15.8),
        (-83.2, 15.0), (-83.5, 12.0), (-83.6, 10.8), (-81.5, 9.0), (-79.5, 9.5),
        (-77.5, 8.7), (-78.0, 7.3), (-80.0, 7.3), (-81.0, 8.0), (-83.5, 8.4),
        (-85.7, 10.0), (-85.9, 11.3), (-87.5, 13.0), (-89.5, 13.5), (-91.5, 14.0),
        (-94.0, 16.0), (-96.5, 15.7), (-100.0, 17.0), (-103.5, 18.3), (-105.5, 20.5),
        (-105.5, 23.0), (-108.5, 25.5), (-112.5, 29.5), (-114.5, 31.5), (-113.0, 29.0),
        (-110.5, 24.0), (-109.5, 23.0), (-112.0, 24.8), (-114.5, 28.0), (-116.0, 30.5),
        (-117.2, 32.6), (-118.5, 34.0), (-120.6, 34.6), (-122.5, 37.5), (-124.0, 40.5),
        (-124.5, 43.0), (-124.0, 46.2), (-124.7, 48.4), (-123.0, 49.0), (-127.0, 50.5),
        (-130.0, 54.5), (-133.0, 57.0), (-137.0, 58.5), (-140.0, 59.7), (-146.0, 60.8),
        (-150.0, 59.5), (-154.0, 58.0), (-158.0, 56.8), (-162.0, 55.3), (-164.5, 54.5),
        (-161.0, 56.4), (-158.5, 58.5), (-162.0, 59.8), (-165.0, 60.5), (-165.0, 62.5),
        (-164.5, 63.3), (-161.0, 64.5), (-166.0, 64.6), (-168.0, 65.6),
    ],
    // Greenland
    &[
        (-73.0, 78.0), (-60.0, 82.0), (-30.0, 83.5), (-12.0, 81.5), (-18.0, 77.0),
        (-20.0, 72.0), (-22.0, 70.0), (-32.0, 68.0), (-40.0, 65.0), (-43.0, 60.0),
        (-48.0, 61.0), (-52.0, 64.5), (-54.0, 67.0), (-55.0, 70.5), (-58.0, 75.5),
        (-68.0, 76.5),
    ],
    // Baffin Island
    &[
        (-81.0, 73.5), (-71.0, 71.0), (-62.0, 66.5), (-66.0, 62.0), (-72.0, 63.8),
        (-78.0, 64.5), (-74.0, 68.5), (-83.0, 70.0), (-89.0, 71.0),
    ],
    // Ellesmere Island
    &[
        (-90.0, 76.5), (-80.0, 76.0), (-75.0, 79.0), (-62.0, 82.3), (-80.0, 83.0),
        (-95.0, 81.0),
    ],
    // Victoria Island
    &[(-118.0, 69.0), (-101.0, 68.5), (-101.0, 72.0), (-112.0, 73.3), (-119.0, 71.0)],
    // Newfoundland
    &[
        (-59.4, 47.6), (-56.0, 49.8), (-55.6, 51.6), (-53.5, 49.2), (-52.7, 47.5),
        (-53.9, 46.8), (-56.0, 47.6),
    ],
    // Cuba
    &[
        (-85.0, 21.9), (-82.5, 23.2), (-80.0, 23.1), (-77.0, 21.5), (-74.2, 20.2),
        (-75.5, 19.9), (-77.8, 19.9), (-78.5, 21.5), (-81.5, 22.2), (-84.0, 21.9),
    ],
    // Hispaniola
    &[
        (-74.4, 18.4), (-72.8, 19.9), (-70.0, 19.7), (-68.4, 18.6), (-70.0, 18.2),
        (-71.7, 17.8), (-73.0, 18.1),
    ],
    // South America
    &[
        (-77.0, 8.5), (-75.0, 11.0), (-72.0, 12.3), (-71.5, 11.0), (-70.0, 12.2),
        (-68.0, 10.5), (-63.0, 10.7), (-61.0, 10.0), (-60.0, 8.5), (-57.0, 6.0),
        (-52.0, 5.0), (-50.0, 1.8), (-50.0, 0.0), (-48.0, -1.0), (-44.0, -2.5),
        (-40.0, -2.9), (-37.0, -5.0), (-35.2, -5.5), (-35.0, -9.0), (-37.0, -11.0),
        (-39.0, -13.5), (-39.0, -17.5), (-40.0, -20.5), (-41.5, -22.5), (-44.0, -23.0),
        (-48.0, -26.0), (-48.8, -28.5), (-51.0, -31.0), (-53.0, -33.8), (-55.0, -35.0),
        (-57.5, -35.2), (-57.0, -37.0), (-58.0, -38.5), (-62.0, -39.0), (-62.3, -40.7),
        (-65.0, -41.5), (-63.5, -42.8), (-65.5, -45.0), (-67.5, -46.5), (-66.0, -48.0),
        (-69.0, -51.0), (-68.5, -52.5), (-70.0, -54.5), (-72.5, -53.5), (-75.0, -51.0),
        (-75.0, -46.5), (-73.5, -43.5), (-73.5, -40.0), (-73.0, -36.5), (-71.5, -33.0),
        (-71.3, -28.5), (-70.2, -23.5), (-70.3, -18.5), (-75.0, -15.3), (-76.3, -13.5),
        (-79.5, -8.0), (-81.2, -5.5), (-80.0, -2.5), (-80.5, -0.5), (-80.0, 1.0),
        (-78.8, 1.5), (-77.4, 4.0), (-77.4, 6.5), (-77.9, 7.3),
    ],
    // Africa
    &[
        (-17.0, 21.0), (-16.0, 24.0), (-14.5, 26.0), (-13.0, 27.8), (-10.0, 29.5),
        (-9.8, 31.5), (-8.5, 33.3), (-6.0, 35.8), (-2.0, 35.1), (2.0, 36.6),
        (8.0, 36.9), (10.0, 37.3), (11.0, 35.0), (10.0, 34.0), (11.5, 33.2),
        (15.2, 32.3), (19.0, 30.3), (20.0, 31.8), (22.5, 32.8), (25.0, 31.6),
        (29.0, 30.9), (32.3, 31.3), (34.2, 31.2), (34.9, 29.5), (34.2, 27.8),
        (35.5, 23.8), (37.0, 21.0), (38.5, 18.0), (39.5, 15.5), (42.8, 12.5),
        (43.3, 11.5), (44.0, 10.4), (51.2, 11.8), (51.0, 10.5), (49.8, 6.0),
        (47.8, 4.0), (44.0, 0.5), (41.5, -1.7), (40.0, -3.5), (39.2, -5.0),
        (39.5, -8.0), (40.5, -10.5), (40.5, -15.0), (37.0, -17.5), (35.0, -20.0),
        (35.5, -24.0), (32.9, -25.9), (32.5, -28.5), (30.5, -31.0), (27.5, -33.5),
        (25.0, -34.0), (20.0, -34.8), (18.4, -34.0), (18.0, -32.0), (16.5, -28.6),
        (15.0, -26.5), (14.5, -22.5), (13.3, -20.5), (11.8, -17.0), (12.3, -13.5),
        (13.7, -10.7), (13.0, -8.5), (12.3, -6.0), (12.0, -5.0), (9.7, -2.5),
        (9.3, 0.5), (9.7, 3.0), (8.7, 4.5), (7.0, 4.4), (5.0, 5.8),
        (4.4, 6.3), (1.5, 6.1), (-2.0, 4.8), (-4.5, 5.2), (-7.5, 4.4),
        (-9.5, 5.5), (-11.5, 6.9), (-13.2, 8.5), (-13.5, 9.8), (-15.0, 11.0),
        (-16.8, 12.4), (-17.5, 14.7), (-16.5, 16.2), (-16.1, 18.5), (-16.5, 19.8),
    ],
    // Madagascar
    &[
        (49.3, -12.0), (50.5, -15.5), (49.8, -17.0), (47.5, -24.8), (45.2, -25.5),
        (43.7, -23.5), (43.3, -21.5), (44.4, -19.5), (44.0, -17.0), (46.5, -15.8),
        (48.0, -13.5),
    ],
    // Eurasia
    &[
        (-5.6, 36.0), (-8.9, 37.0), (-9.5, 38.8), (-8.8, 42.0), (-9.3, 43.0),
        (-8.0, 43.7), (-4.0, 43.4), (-1.8, 43.4), (-1.3, 46.0), (-2.2, 47.3),
        (-4.6, 48.0), (-1.8, 48.7), (-1.5, 49.7), (0.2, 49.5), (1.6, 50.9),
        (3.5, 51.4), (4.8, 53.0), (7.0, 53.5), (8.8, 54.0), (8.6, 55.5),
        (8.2, 57.0), (10.5, 57.7), (11.0, 59.0), (7.0, 58.0), (5.5, 59.0),
        (5.0, 61.5), (7.0, 63.0), (10.0, 64.5), (13.0, 67.0), (16.0, 69.0),
        (19.0, 70.0), (23.0, 71.0), (28.0, 71.2), (31.0, 70.0), (33.0, 69.3),
        (36.0, 69.0), (41.0, 67.5), (40.0, 65.0), (44.0, 66.5), (44.0, 68.5),
        (46.0, 68.0), (53.0, 68.5), (58.0, 69.0), (60.0, 69.8), (68.0, 73.0),
        (75.0, 72.5), (80.0, 73.5), (87.0, 75.0), (100.0, 76.5), (105.0, 77.7),
        (113.0, 73.8), (120.0, 73.0), (129.0, 71.5), (140.0, 72.5), (150.0, 71.5),
        (160.0, 70.0), (170.0, 70.0), (180.0, 69.0), (180.0, 65.0), (176.0, 62.5),
        (170.0, 60.0), (163.0, 59.8), (162.0, 57.7), (163.0, 56.0), (156.6, 51.0),
        (156.0, 55.0), (156.0, 57.5), (160.0, 61.0), (156.0, 61.7), (152.0, 59.3),
        (143.0, 59.3), (140.0, 58.0), (138.0, 55.0), (141.0, 53.0), (140.0, 48.0),
        (135.5, 43.7), (133.0, 42.8), (131.0, 42.6), (129.5, 41.0), (128.0, 39.0),
        (129.4, 36.0), (129.3, 35.2), (126.5, 34.4), (126.2, 37.0), (124.5, 39.8),
        (121.5, 39.0), (121.0, 40.8), (118.0, 39.0), (119.0, 37.3), (122.5, 37.4),
        (120.5, 36.0), (119.2, 34.8), (121.0, 32.0), (122.0, 30.0), (120.0, 26.8),
        (118.0, 24.5), (114.0, 22.3), (110.5, 21.0), (108.0, 21.5), (106.5, 20.5),
        (105.8, 19.0), (107.5, 16.5), (109.2, 13.0), (109.0, 11.5), (106.0, 9.5),
        (104.8, 8.6), (105.0, 10.5), (103.0, 11.0), (100.5, 12.7), (100.0, 10.0),
        (100.3, 6.5), (102.0, 6.0), (103.5, 4.5), (104.2, 1.4), (103.4, 1.3),
        (101.3, 2.9), (100.3, 5.3), (98.3, 8.0), (98.5, 10.0), (98.7, 13.0),
        (97.7, 16.5), (97.0, 16.8), (94.4, 16.0), (94.0, 18.8), (92.3, 21.0),
        (91.8, 22.5), (90.5, 22.0), (88.8, 21.6), (87.0, 21.5), (85.0, 19.5),
        (82.3, 16.6), (80.3, 15.5), (80.0, 13.0), (79.8, 10.3), (78.0, 8.3),
        (77.0, 8.1), (76.3, 10.0), (74.8, 12.8), (73.5, 16.0), (72.8, 19.0),
        (72.9, 21.0), (70.2, 20.8), (68.8, 22.3), (68.5, 23.5), (67.0, 24.8),
        (66.5, 25.4), (61.5, 25.2), (57.3, 25.7), (56.5, 27.1), (54.5, 26.5),
        (52.0, 27.8), (50.2, 30.0), (48.6, 30.0), (48.0, 29.5), (50.2, 26.6),
        (51.2, 26.0), (52.0, 24.0), (54.0, 24.2), (56.0, 26.0), (56.4, 24.7),
        (58.8, 23.6), (59.8, 22.5), (58.5, 20.5), (57.7, 18.8), (55.2, 17.5),
        (52.2, 15.6), (48.7, 14.0), (45.0, 12.8), (43.4, 12.7), (42.8, 15.0),
        (42.7, 16.5), (41.2, 19.0), (39.1, 21.5), (38.5, 24.0), (37.2, 25.5),
        (35.8, 28.0), (34.9, 29.5), (34.5, 31.5), (35.0, 33.0), (35.8, 35.5),
        (36.2, 36.6), (34.5, 36.8), (32.5, 36.1), (30.0, 36.3), (28.0, 36.7),
        (27.0, 37.8), (26.5, 39.3), (26.5, 40.8), (24.0, 40.7), (22.6, 40.3),
        (23.3, 39.2), (22.6, 36.5), (21.6, 37.0), (21.0, 38.5), (20.0, 39.7),
        (19.4, 41.5), (18.5, 42.5), (16.0, 43.5), (15.2, 44.5), (13.7, 45.5),
        (12.3, 45.3), (12.4, 44.2), (13.6, 43.5), (16.0, 41.4), (18.5, 40.2),
        (17.0, 39.0), (16.5, 38.0), (15.6, 38.0), (15.7, 40.0), (14.5, 40.6),
        (12.4, 41.7), (10.5, 42.9), (10.2, 43.9), (8.8, 44.4), (7.5, 43.8),
        (6.5, 43.1), (4.5, 43.4), (3.1, 43.1), (3.2, 41.9), (1.0, 41.0),
        (0.0, 39.7), (-0.3, 38.5), (-0.7, 37.6), (-2.1, 36.7), (-4.4, 36.7),
    ],
    // Great Britain
    &[
        (-5.7, 50.0), (1.4, 51.2), (1.7, 52.7), (0.0, 53.5), (-1.5, 55.5),
        (-2.0, 57.0), (-1.8, 57.6), (-3.8, 57.6), (-3.0, 58.6), (-5.0, 58.6),
        (-6.2, 56.8), (-5.5, 55.3), (-4.9, 54.8), (-3.2, 54.9), (-3.1, 53.4),
        (-4.6, 53.3), (-4.2, 52.3), (-5.3, 51.7), (-3.2, 51.4), (-5.6, 50.2),
    ],
    // Ireland
    &[
        (-6.0, 52.2), (-6.1, 54.0), (-5.6, 54.8), (-7.3, 55.3), (-8.5, 54.6),
        (-10.0, 54.2), (-9.8, 53.0), (-10.4, 52.0), (-8.5, 51.6), (-6.3, 52.1),
    ],
    // Iceland
    &[
        (-22.5, 64.0), (-24.0, 65.5), (-22.0, 66.4), (-16.0, 66.5), (-14.0, 65.6),
        (-14.5, 64.5), (-18.0, 63.4), (-21.0, 63.8),
    ],
    // Svalbard
    &[(11.0, 78.5), (16.0, 80.5), (27.0, 80.0), (22.0, 77.5), (16.5, 76.6)],
    // Novaya Zemlya
    &[
        (52.0, 71.5), (56.0, 73.5), (58.0, 75.5), (68.0, 76.8), (62.0, 75.0),
        (57.0, 72.5), (55.0, 70.6),
    ],
    // Sri Lanka
    &[(79.8, 6.2), (79.9, 9.8), (81.3, 8.5), (81.8, 7.0), (80.5, 5.9)],
    // Honshu
    &[
        (130.9, 34.0), (132.5, 35.5), (135.5, 35.6), (136.8, 37.3), (139.5, 38.5),
        (140.0, 40.5), (141.5, 41.4), (142.0, 39.5), (141.0, 37.5), (140.8, 35.8),
        (139.8, 35.0), (138.7, 34.6), (137.0, 34.6), (135.0, 33.5), (132.5, 34.2),
    ],
    // Hokkaido
    &[
        (140.0, 41.5), (141.2, 43.2), (141.7, 45.4), (144.0, 44.1), (145.6, 43.3),
        (143.3, 42.0), (141.2, 42.3),
    ],
    // Kyushu
    &[(129.7, 33.1), (131.0, 33.9), (131.8, 32.8), (131.2, 31.3), (130.2, 31.1), (130.2, 32.6)],
    // Shikoku
    &[(132.5, 33.0), (134.7, 34.0), (134.6, 33.3), (133.0, 32.8)],
    // Sakhalin
    &[
        (142.0, 46.0), (143.5, 46.6), (143.0, 49.3), (144.5, 49.0), (143.2, 51.5),
        (143.5, 54.3), (142.7, 54.3), (142.0, 51.5), (141.8, 48.0),
    ],
    // Taiwan
    &[(120.2, 22.6), (121.0, 25.2), (122.0, 25.0), (121.0, 22.0)],
    // Hainan
    &[(108.6, 19.2), (110.5, 20.1), (111.0, 19.6), (109.5, 18.2)],
    // Luzon
    &[
        (120.0, 18.5), (122.2, 18.5), (122.0, 16.0), (124.0, 13.0), (121.0, 13.8),
        (120.3, 14.8), (120.5, 16.8),
    ],
    // Mindanao
    &[(122.0, 7.0), (124.0, 8.0), (125.5, 9.8), (126.6, 7.3), (125.5, 5.8), (124.0, 6.3)],
    // Borneo
    &[
        (109.0, 1.6), (110.3, 1.7), (111.5, 2.7), (113.0, 3.2), (115.5, 5.3),
        (117.0, 7.0), (119.2, 5.2), (118.0, 4.3), (117.8, 1.0), (119.0, 0.9),
        (117.5, -0.7), (116.5, -2.7), (116.0, -4.0), (114.5, -3.4), (111.0, -3.0),
        (110.0, -1.7), (109.0, 0.2),
    ],
    // Sumatra
    &[
        (95.3, 5.6), (97.5, 5.2), (100.4, 2.2), (103.5, -0.8), (106.0, -3.0),
        (105.8, -5.8), (104.5, -5.8), (102.0, -4.0), (100.3, -0.8), (98.7, 1.7),
        (97.0, 3.6),
    ],
    // Java
    &[
        (105.2, -6.8), (106.0, -5.9), (108.3, -6.2), (110.4, -6.9), (112.6, -6.9),
        (114.5, -7.8), (114.4, -8.7), (110.0, -8.1), (106.4, -7.4),
    ],
    // Sulawesi
    &[
        (119.5, -5.5), (120.5, -2.8), (121.3, -4.7), (122.8, -4.6), (121.5, -1.9),
        (123.3, -0.9), (120.5, -0.6), (120.3, 0.5), (124.5, 1.0), (125.0, 1.5),
        (120.7, 1.4), (119.8, 0.0), (119.0, -3.5),
    ],
    // New Guinea
    &[
        (131.0, -1.3), (134.0, -0.8), (138.0, -1.6), (141.0, -2.6), (145.0, -4.3),
        (146.0, -5.6), (148.0, -8.0), (150.5, -10.5), (147.5, -10.0), (143.0, -9.2),
        (141.0, -9.1), (138.5, -8.3), (137.5, -5.0), (134.0, -4.0), (132.0, -2.7),
    ],
    // Australia
    &[
        (113.5, -22.0), (114.0, -26.2), (115.0, -30.0), (115.0, -34.0), (117.9, -35.1),
        (123.5, -33.9), (126.0, -32.3), (131.0, -31.5), (134.0, -32.8), (135.7, -34.9),
        (137.8, -32.6), (137.6, -35.6), (139.6, -36.2), (141.0, -38.0), (144.0, -38.5),
        (146.3, -39.0), (150.0, -37.5), (151.0, -34.0), (153.1, -30.0), (153.2, -25.5),
        (150.8, -22.5), (148.8, -20.3), (146.0, -17.5), (145.3, -14.9), (143.5, -12.8),
        (142.5, -10.7), (141.6, -12.7), (141.5, -15.5), (140.6, -17.6), (139.0, -17.0),
        (137.0, -15.9), (135.5, -14.8), (136.8, -12.3), (135.0, -12.0), (132.5, -11.5),
        (131.0, -12.2), (129.5, -14.9), (128.0, -15.0), (125.8, -14.5), (123.5, -17.0),
        (122.2, -18.2), (119.0, -20.0), (116.7, -20.7), (114.5, -21.8),
    ],
    // Tasmania
    &[(144.6, -40.7), (148.3, -40.9), (148.3, -42.2), (147.0, -43.6), (145.3, -42.5)],
    // New Zealand, North Island
    &[
        (172.7, -34.5), (174.5, -36.0), (176.0, -37.6), (178.5, -37.7), (177.5, -39.0),
        (176.8, -40.0), (175.3, -41.6), (174.6, -41.3), (175.0, -40.0), (173.8, -39.2),
        (174.6, -38.0), (174.2, -36.5),
    ],
    // New Zealand, South Island
    &[
        (172.7, -40.5), (174.3, -41.4), (173.5, -42.9), (172.8, -43.8), (171.0, -45.0),
        (169.0, -46.7), (166.5, -46.0), (168.3, -44.0), (170.7, -42.8), (172.0, -41.5),
    ],
    // Antarctica
    &[
        (-180.0, -90.0), (-180.0, -84.0), (-150.0, -76.0), (-135.0, -74.5), (-120.0, -73.5),
        (-100.0, -73.0), (-80.0, -73.0), (-75.0, -71.0), (-62.0, -64.0), (-57.0, -63.5),
        (-60.0, -68.0), (-62.0, -75.0), (-45.0, -78.0), (-30.0, -76.0), (-20.0, -73.0),
        (-10.0, -71.0), (0.0, -70.0), (15.0, -70.0), (30.0, -69.5), (40.0, -69.0),
        (55.0, -66.5), (70.0, -67.5), (75.0, -69.5), (85.0, -66.5), (100.0, -66.0),
        (115.0, -66.5), (130.0, -66.0), (145.0, -67.0), (160.0, -70.0), (170.0, -71.5),
        (167.0, -77.0), (180.0, -78.0), (180.0, -90.0),
    ],
];

/// Inland seas and large lakes, cut out of the land rings.
pub const LAKES: &[Ring] = &[
    // Hudson Bay
    &[
        (-95.0, 59.0), (-93.0, 57.0), (-88.0, 56.5), (-82.5, 55.0), (-80.5, 51.5),
        (-79.0, 54.5), (-77.0, 58.0), (-78.0, 62.3), (-85.0, 63.5), (-87.0, 64.2),
        (-91.0, 63.0), (-94.0, 61.0),
    ],
    // Lake Superior
    &[(-92.0, 46.7), (-84.5, 46.5), (-85.0, 48.0), (-89.0, 48.3)],
    // Lakes Michigan and Huron
    &[
        (-88.0, 41.7), (-86.5, 41.7), (-84.7, 45.8), (-82.5, 43.0), (-80.5, 44.5),
        (-81.5, 45.9), (-84.5, 46.0), (-87.0, 45.8), (-88.0, 44.5),
    ],
    // Lake Erie
    &[(-83.5, 41.6), (-79.0, 42.8), (-79.0, 43.0), (-83.0, 42.2)],
    // Lake Ontario
    &[(-79.8, 43.3), (-76.2, 43.5), (-76.3, 44.2), (-79.2, 43.8)],
    // Baltic Sea
    &[
        (10.8, 54.0), (14.0, 54.0), (18.0, 54.8), (21.0, 55.0), (21.0, 57.0),
        (24.0, 57.2), (24.5, 58.5), (23.5, 59.2), (28.0, 59.8), (30.0, 60.0),
        (27.0, 60.5), (22.5, 60.0), (21.5, 61.0), (21.2, 63.0), (25.0, 65.0),
        (24.5, 65.8), (22.0, 65.7), (21.0, 64.5), (19.0, 63.3), (17.5, 62.3),
        (17.0, 61.0), (19.0, 59.8), (18.5, 59.0), (16.7, 57.5), (16.2, 56.2),
        (14.2, 55.4), (12.8, 55.4), (12.5, 56.5), (11.8, 57.7), (10.5, 57.5),
        (10.2, 56.2), (10.5, 55.0),
    ],
    // Black Sea
    &[
        (28.0, 41.3), (29.0, 41.2), (31.0, 41.1), (35.0, 42.0), (38.0, 41.0),
        (41.5, 41.5), (41.6, 42.6), (39.5, 44.0), (38.0, 44.5), (37.0, 45.2),
        (33.5, 44.5), (32.5, 45.4), (31.0, 46.6), (30.0, 45.8), (29.6, 45.0),
        (28.7, 44.0), (27.8, 42.5),
    ],
    // Caspian Sea
    &[
        (49.0, 46.5), (51.0, 47.0), (53.0, 46.5), (53.0, 45.0), (51.5, 44.3),
        (52.7, 42.0), (53.0, 40.0), (54.0, 38.0), (53.9, 37.0), (51.0, 36.7),
        (49.0, 37.6), (49.5, 40.3), (48.5, 41.8), (47.5, 43.0), (47.0, 44.5),
    ],
    // Lake Victoria
    &[(32.0, -0.2), (34.0, -0.3), (34.5, -1.3), (33.5, -2.5), (32.0, -3.0), (31.6, -1.5)],
];

/// Land borders as open polylines.
pub const BORDERS: &[Ring] = &[
    // Canada / United States
    &[
        (-123.3, 49.0), (-95.2, 49.0), (-89.5, 48.0), (-84.5, 46.5), (-82.5, 45.0),
        (-82.5, 42.5), (-79.0, 42.8), (-79.0, 43.3), (-76.0, 44.0), (-74.7, 45.0),
        (-71.5, 45.0), (-70.3, 46.2), (-69.0, 47.4), (-67.8, 47.0), (-67.0, 45.0),
    ],
    &[(-141.0, 69.6), (-141.0, 60.3), (-137.0, 59.0), (-133.5, 56.5), (-130.0, 55.0)],
    // United States / Mexico
    &[
        (-117.1, 32.5), (-114.7, 32.7), (-111.0, 31.3), (-108.2, 31.3), (-106.5, 31.8),
        (-104.5, 29.6), (-103.0, 29.0), (-101.4, 29.8), (-99.5, 27.5), (-97.2, 25.9),
    ],
    // Brazil
    &[
        (-51.5, 4.4), (-60.0, 5.0), (-64.0, 3.8), (-70.0, 1.0), (-69.5, -4.2),
        (-73.0, -7.3), (-70.5, -11.0), (-65.0, -10.0), (-60.0, -13.5), (-58.0, -16.2),
        (-58.0, -20.0), (-55.0, -22.3), (-54.3, -25.5), (-53.6, -27.0), (-57.6, -30.2),
        (-53.4, -33.7),
    ],
    // Argentina / Chile
    &[
        (-68.5, -52.3), (-72.0, -50.0), (-72.0, -42.0), (-71.0, -36.0), (-70.0, -30.0),
        (-68.5, -24.0), (-67.0, -22.8),
    ],
    // France / Spain
    &[(-1.8, 43.4), (3.2, 42.4)],
    // France / Belgium, Germany, Switzerland, Italy
    &[
        (2.5, 51.1), (4.2, 49.9), (6.4, 49.5), (8.2, 49.0), (7.6, 47.6),
        (6.0, 46.2), (7.0, 45.9), (7.7, 44.0),
    ],
    // Germany / Poland, Czechia, Austria
    &[
        (14.2, 53.9), (14.6, 52.5), (15.0, 51.0), (12.5, 50.3), (13.8, 48.7),
        (13.0, 47.5), (10.0, 47.5), (7.6, 47.6),
    ],
    // Russia, western border
    &[
        (28.0, 69.7), (29.0, 66.0), (30.0, 61.5), (28.0, 59.5), (28.0, 57.5),
        (31.5, 52.1), (34.0, 52.0), (35.5, 50.4), (40.0, 49.6), (38.0, 47.1),
    ],
    // Russia, southern border
    &[
        (50.0, 51.0), (61.0, 51.0), (69.0, 55.0), (76.0, 54.0), (87.0, 49.0),
        (97.0, 50.0), (107.0, 50.2), (116.0, 50.0), (120.0, 53.3), (127.0, 49.6),
        (134.7, 48.3), (131.0, 44.9), (130.6, 42.4),
    ],
    // China / South Asia
    &[
        (74.0, 37.0), (78.0, 35.5), (80.0, 32.5), (81.0, 30.0), (88.0, 28.0),
        (92.0, 27.7), (97.0, 28.3),
    ],
    // India / Pakistan
    &[(74.5, 32.5), (74.0, 30.0), (71.0, 28.0), (70.0, 25.0), (68.7, 23.9)],
    // Iran, western border
    &[(44.3, 39.4), (44.8, 37.2), (46.0, 35.0), (48.0, 30.0)],
    // Arabian peninsula, northern border
    &[(39.0, 32.0), (44.0, 29.0), (46.5, 29.1), (47.7, 28.5)],
    // Egypt
    &[(25.0, 31.6), (25.0, 22.0), (36.8, 22.0)],
    // Democratic Republic of the Congo
    &[
        (12.5, -6.0), (16.5, -5.9), (19.5, -8.0), (22.0, -11.0), (24.0, -11.0),
        (28.0, -12.5), (29.5, -8.0), (29.0, -1.5), (31.0, 2.5), (27.5, 5.0),
        (25.0, 5.2), (18.5, 3.5), (16.0, 2.0), (13.5, -4.5),
    ],
];
