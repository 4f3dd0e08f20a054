//! Symbolic names for Linux input scancodes and event fields.
//!
//! The tables mirror every `KEY_*` and `BTN_*` code of the kernel up to
//! `KEY_MAX`, so any name an rc-core keymap can emit resolves. Aliases such as
//! `KEY_ZOOM` (for `KEY_FULL_SCREEN`) resolve to the same code.

use input_linux_sys::{EV_ABS, EV_KEY, EV_LED, EV_MSC, EV_REL, EV_SYN};

/// Canonical name per code, from `linux/input-event-codes.h` up to `KEY_MAX`.
static KEY_NAMES: phf::Map<u16, &'static str> = phf::phf_map! {
    0u16 => "KEY_RESERVED",
    1u16 => "KEY_ESC",
    2u16 => "KEY_1",
    3u16 => "KEY_2",
    4u16 => "KEY_3",
    5u16 => "KEY_4",
    6u16 => "KEY_5",
    7u16 => "KEY_6",
    8u16 => "KEY_7",
    9u16 => "KEY_8",
    10u16 => "KEY_9",
    11u16 => "KEY_0",
    12u16 => "KEY_MINUS",
    13u16 => "KEY_EQUAL",
    14u16 => "KEY_BACKSPACE",
    15u16 => "KEY_TAB",
    16u16 => "KEY_Q",
    17u16 => "KEY_W",
    18u16 => "KEY_E",
    19u16 => "KEY_R",
    20u16 => "KEY_T",
    21u16 => "KEY_Y",
    22u16 => "KEY_U",
    23u16 => "KEY_I",
    24u16 => "KEY_O",
    25u16 => "KEY_P",
    26u16 => "KEY_LEFTBRACE",
    27u16 => "KEY_RIGHTBRACE",
    28u16 => "KEY_ENTER",
    29u16 => "KEY_LEFTCTRL",
    30u16 => "KEY_A",
    31u16 => "KEY_S",
    32u16 => "KEY_D",
    33u16 => "KEY_F",
    34u16 => "KEY_G",
    35u16 => "KEY_H",
    36u16 => "KEY_J",
    37u16 => "KEY_K",
    38u16 => "KEY_L",
    39u16 => "KEY_SEMICOLON",
    40u16 => "KEY_APOSTROPHE",
    41u16 => "KEY_GRAVE",
    42u16 => "KEY_LEFTSHIFT",
    43u16 => "KEY_BACKSLASH",
    44u16 => "KEY_Z",
    45u16 => "KEY_X",
    46u16 => "KEY_C",
    47u16 => "KEY_V",
    48u16 => "KEY_B",
    49u16 => "KEY_N",
    50u16 => "KEY_M",
    51u16 => "KEY_COMMA",
    52u16 => "KEY_DOT",
    53u16 => "KEY_SLASH",
    54u16 => "KEY_RIGHTSHIFT",
    55u16 => "KEY_KPASTERISK",
    56u16 => "KEY_LEFTALT",
    57u16 => "KEY_SPACE",
    58u16 => "KEY_CAPSLOCK",
    59u16 => "KEY_F1",
    60u16 => "KEY_F2",
    61u16 => "KEY_F3",
    62u16 => "KEY_F4",
    63u16 => "KEY_F5",
    64u16 => "KEY_F6",
    65u16 => "KEY_F7",
    66u16 => "KEY_F8",
    67u16 => "KEY_F9",
    68u16 => "KEY_F10",
    69u16 => "KEY_NUMLOCK",
    70u16 => "KEY_SCROLLLOCK",
    71u16 => "KEY_KP7",
    72u16 => "KEY_KP8",
    73u16 => "KEY_KP9",
    74u16 => "KEY_KPMINUS",
    75u16 => "KEY_KP4",
    76u16 => "KEY_KP5",
    77u16 => "KEY_KP6",
    78u16 => "KEY_KPPLUS",
    79u16 => "KEY_KP1",
    80u16 => "KEY_KP2",
    81u16 => "KEY_KP3",
    82u16 => "KEY_KP0",
    83u16 => "KEY_KPDOT",
    85u16 => "KEY_ZENKAKUHANKAKU",
    86u16 => "KEY_102ND",
    87u16 => "KEY_F11",
    88u16 => "KEY_F12",
    89u16 => "KEY_RO",
    90u16 => "KEY_KATAKANA",
    91u16 => "KEY_HIRAGANA",
    92u16 => "KEY_HENKAN",
    93u16 => "KEY_KATAKANAHIRAGANA",
    94u16 => "KEY_MUHENKAN",
    95u16 => "KEY_KPJPCOMMA",
    96u16 => "KEY_KPENTER",
    97u16 => "KEY_RIGHTCTRL",
    98u16 => "KEY_KPSLASH",
    99u16 => "KEY_SYSRQ",
    100u16 => "KEY_RIGHTALT",
    101u16 => "KEY_LINEFEED",
    102u16 => "KEY_HOME",
    103u16 => "KEY_UP",
    104u16 => "KEY_PAGEUP",
    105u16 => "KEY_LEFT",
    106u16 => "KEY_RIGHT",
    107u16 => "KEY_END",
    108u16 => "KEY_DOWN",
    109u16 => "KEY_PAGEDOWN",
    110u16 => "KEY_INSERT",
    111u16 => "KEY_DELETE",
    112u16 => "KEY_MACRO",
    113u16 => "KEY_MUTE",
    114u16 => "KEY_VOLUMEDOWN",
    115u16 => "KEY_VOLUMEUP",
    116u16 => "KEY_POWER",
    117u16 => "KEY_KPEQUAL",
    118u16 => "KEY_KPPLUSMINUS",
    119u16 => "KEY_PAUSE",
    120u16 => "KEY_SCALE",
    121u16 => "KEY_KPCOMMA",
    122u16 => "KEY_HANGEUL",
    123u16 => "KEY_HANJA",
    124u16 => "KEY_YEN",
    125u16 => "KEY_LEFTMETA",
    126u16 => "KEY_RIGHTMETA",
    127u16 => "KEY_COMPOSE",
    128u16 => "KEY_STOP",
    129u16 => "KEY_AGAIN",
    130u16 => "KEY_PROPS",
    131u16 => "KEY_UNDO",
    132u16 => "KEY_FRONT",
    133u16 => "KEY_COPY",
    134u16 => "KEY_OPEN",
    135u16 => "KEY_PASTE",
    136u16 => "KEY_FIND",
    137u16 => "KEY_CUT",
    138u16 => "KEY_HELP",
    139u16 => "KEY_MENU",
    140u16 => "KEY_CALC",
    141u16 => "KEY_SETUP",
    142u16 => "KEY_SLEEP",
    143u16 => "KEY_WAKEUP",
    144u16 => "KEY_FILE",
    145u16 => "KEY_SENDFILE",
    146u16 => "KEY_DELETEFILE",
    147u16 => "KEY_XFER",
    148u16 => "KEY_PROG1",
    149u16 => "KEY_PROG2",
    150u16 => "KEY_WWW",
    151u16 => "KEY_MSDOS",
    152u16 => "KEY_COFFEE",
    153u16 => "KEY_ROTATE_DISPLAY",
    154u16 => "KEY_CYCLEWINDOWS",
    155u16 => "KEY_MAIL",
    156u16 => "KEY_BOOKMARKS",
    157u16 => "KEY_COMPUTER",
    158u16 => "KEY_BACK",
    159u16 => "KEY_FORWARD",
    160u16 => "KEY_CLOSECD",
    161u16 => "KEY_EJECTCD",
    162u16 => "KEY_EJECTCLOSECD",
    163u16 => "KEY_NEXTSONG",
    164u16 => "KEY_PLAYPAUSE",
    165u16 => "KEY_PREVIOUSSONG",
    166u16 => "KEY_STOPCD",
    167u16 => "KEY_RECORD",
    168u16 => "KEY_REWIND",
    169u16 => "KEY_PHONE",
    170u16 => "KEY_ISO",
    171u16 => "KEY_CONFIG",
    172u16 => "KEY_HOMEPAGE",
    173u16 => "KEY_REFRESH",
    174u16 => "KEY_EXIT",
    175u16 => "KEY_MOVE",
    176u16 => "KEY_EDIT",
    177u16 => "KEY_SCROLLUP",
    178u16 => "KEY_SCROLLDOWN",
    179u16 => "KEY_KPLEFTPAREN",
    180u16 => "KEY_KPRIGHTPAREN",
    181u16 => "KEY_NEW",
    182u16 => "KEY_REDO",
    183u16 => "KEY_F13",
    184u16 => "KEY_F14",
    185u16 => "KEY_F15",
    186u16 => "KEY_F16",
    187u16 => "KEY_F17",
    188u16 => "KEY_F18",
    189u16 => "KEY_F19",
    190u16 => "KEY_F20",
    191u16 => "KEY_F21",
    192u16 => "KEY_F22",
    193u16 => "KEY_F23",
    194u16 => "KEY_F24",
    200u16 => "KEY_PLAYCD",
    201u16 => "KEY_PAUSECD",
    202u16 => "KEY_PROG3",
    203u16 => "KEY_PROG4",
    204u16 => "KEY_ALL_APPLICATIONS",
    205u16 => "KEY_SUSPEND",
    206u16 => "KEY_CLOSE",
    207u16 => "KEY_PLAY",
    208u16 => "KEY_FASTFORWARD",
    209u16 => "KEY_BASSBOOST",
    210u16 => "KEY_PRINT",
    211u16 => "KEY_HP",
    212u16 => "KEY_CAMERA",
    213u16 => "KEY_SOUND",
    214u16 => "KEY_QUESTION",
    215u16 => "KEY_EMAIL",
    216u16 => "KEY_CHAT",
    217u16 => "KEY_SEARCH",
    218u16 => "KEY_CONNECT",
    219u16 => "KEY_FINANCE",
    220u16 => "KEY_SPORT",
    221u16 => "KEY_SHOP",
    222u16 => "KEY_ALTERASE",
    223u16 => "KEY_CANCEL",
    224u16 => "KEY_BRIGHTNESSDOWN",
    225u16 => "KEY_BRIGHTNESSUP",
    226u16 => "KEY_MEDIA",
    227u16 => "KEY_SWITCHVIDEOMODE",
    228u16 => "KEY_KBDILLUMTOGGLE",
    229u16 => "KEY_KBDILLUMDOWN",
    230u16 => "KEY_KBDILLUMUP",
    231u16 => "KEY_SEND",
    232u16 => "KEY_REPLY",
    233u16 => "KEY_FORWARDMAIL",
    234u16 => "KEY_SAVE",
    235u16 => "KEY_DOCUMENTS",
    236u16 => "KEY_BATTERY",
    237u16 => "KEY_BLUETOOTH",
    238u16 => "KEY_WLAN",
    239u16 => "KEY_UWB",
    240u16 => "KEY_UNKNOWN",
    241u16 => "KEY_VIDEO_NEXT",
    242u16 => "KEY_VIDEO_PREV",
    243u16 => "KEY_BRIGHTNESS_CYCLE",
    244u16 => "KEY_BRIGHTNESS_AUTO",
    245u16 => "KEY_DISPLAY_OFF",
    246u16 => "KEY_WWAN",
    247u16 => "KEY_RFKILL",
    248u16 => "KEY_MICMUTE",
    256u16 => "BTN_0",
    257u16 => "BTN_1",
    258u16 => "BTN_2",
    259u16 => "BTN_3",
    260u16 => "BTN_4",
    261u16 => "BTN_5",
    262u16 => "BTN_6",
    263u16 => "BTN_7",
    264u16 => "BTN_8",
    265u16 => "BTN_9",
    272u16 => "BTN_LEFT",
    273u16 => "BTN_RIGHT",
    274u16 => "BTN_MIDDLE",
    275u16 => "BTN_SIDE",
    276u16 => "BTN_EXTRA",
    277u16 => "BTN_FORWARD",
    278u16 => "BTN_BACK",
    279u16 => "BTN_TASK",
    288u16 => "BTN_TRIGGER",
    289u16 => "BTN_THUMB",
    290u16 => "BTN_THUMB2",
    291u16 => "BTN_TOP",
    292u16 => "BTN_TOP2",
    293u16 => "BTN_PINKIE",
    294u16 => "BTN_BASE",
    295u16 => "BTN_BASE2",
    296u16 => "BTN_BASE3",
    297u16 => "BTN_BASE4",
    298u16 => "BTN_BASE5",
    299u16 => "BTN_BASE6",
    303u16 => "BTN_DEAD",
    304u16 => "BTN_SOUTH",
    305u16 => "BTN_EAST",
    306u16 => "BTN_C",
    307u16 => "BTN_NORTH",
    308u16 => "BTN_WEST",
    309u16 => "BTN_Z",
    310u16 => "BTN_TL",
    311u16 => "BTN_TR",
    312u16 => "BTN_TL2",
    313u16 => "BTN_TR2",
    314u16 => "BTN_SELECT",
    315u16 => "BTN_START",
    316u16 => "BTN_MODE",
    317u16 => "BTN_THUMBL",
    318u16 => "BTN_THUMBR",
    320u16 => "BTN_TOOL_PEN",
    321u16 => "BTN_TOOL_RUBBER",
    322u16 => "BTN_TOOL_BRUSH",
    323u16 => "BTN_TOOL_PENCIL",
    324u16 => "BTN_TOOL_AIRBRUSH",
    325u16 => "BTN_TOOL_FINGER",
    326u16 => "BTN_TOOL_MOUSE",
    327u16 => "BTN_TOOL_LENS",
    328u16 => "BTN_TOOL_QUINTTAP",
    329u16 => "BTN_STYLUS3",
    330u16 => "BTN_TOUCH",
    331u16 => "BTN_STYLUS",
    332u16 => "BTN_STYLUS2",
    333u16 => "BTN_TOOL_DOUBLETAP",
    334u16 => "BTN_TOOL_TRIPLETAP",
    335u16 => "BTN_TOOL_QUADTAP",
    336u16 => "BTN_GEAR_DOWN",
    337u16 => "BTN_GEAR_UP",
    352u16 => "KEY_OK",
    353u16 => "KEY_SELECT",
    354u16 => "KEY_GOTO",
    355u16 => "KEY_CLEAR",
    356u16 => "KEY_POWER2",
    357u16 => "KEY_OPTION",
    358u16 => "KEY_INFO",
    359u16 => "KEY_TIME",
    360u16 => "KEY_VENDOR",
    361u16 => "KEY_ARCHIVE",
    362u16 => "KEY_PROGRAM",
    363u16 => "KEY_CHANNEL",
    364u16 => "KEY_FAVORITES",
    365u16 => "KEY_EPG",
    366u16 => "KEY_PVR",
    367u16 => "KEY_MHP",
    368u16 => "KEY_LANGUAGE",
    369u16 => "KEY_TITLE",
    370u16 => "KEY_SUBTITLE",
    371u16 => "KEY_ANGLE",
    372u16 => "KEY_FULL_SCREEN",
    373u16 => "KEY_MODE",
    374u16 => "KEY_KEYBOARD",
    375u16 => "KEY_ASPECT_RATIO",
    376u16 => "KEY_PC",
    377u16 => "KEY_TV",
    378u16 => "KEY_TV2",
    379u16 => "KEY_VCR",
    380u16 => "KEY_VCR2",
    381u16 => "KEY_SAT",
    382u16 => "KEY_SAT2",
    383u16 => "KEY_CD",
    384u16 => "KEY_TAPE",
    385u16 => "KEY_RADIO",
    386u16 => "KEY_TUNER",
    387u16 => "KEY_PLAYER",
    388u16 => "KEY_TEXT",
    389u16 => "KEY_DVD",
    390u16 => "KEY_AUX",
    391u16 => "KEY_MP3",
    392u16 => "KEY_AUDIO",
    393u16 => "KEY_VIDEO",
    394u16 => "KEY_DIRECTORY",
    395u16 => "KEY_LIST",
    396u16 => "KEY_MEMO",
    397u16 => "KEY_CALENDAR",
    398u16 => "KEY_RED",
    399u16 => "KEY_GREEN",
    400u16 => "KEY_YELLOW",
    401u16 => "KEY_BLUE",
    402u16 => "KEY_CHANNELUP",
    403u16 => "KEY_CHANNELDOWN",
    404u16 => "KEY_FIRST",
    405u16 => "KEY_LAST",
    406u16 => "KEY_AB",
    407u16 => "KEY_NEXT",
    408u16 => "KEY_RESTART",
    409u16 => "KEY_SLOW",
    410u16 => "KEY_SHUFFLE",
    411u16 => "KEY_BREAK",
    412u16 => "KEY_PREVIOUS",
    413u16 => "KEY_DIGITS",
    414u16 => "KEY_TEEN",
    415u16 => "KEY_TWEN",
    416u16 => "KEY_VIDEOPHONE",
    417u16 => "KEY_GAMES",
    418u16 => "KEY_ZOOMIN",
    419u16 => "KEY_ZOOMOUT",
    420u16 => "KEY_ZOOMRESET",
    421u16 => "KEY_WORDPROCESSOR",
    422u16 => "KEY_EDITOR",
    423u16 => "KEY_SPREADSHEET",
    424u16 => "KEY_GRAPHICSEDITOR",
    425u16 => "KEY_PRESENTATION",
    426u16 => "KEY_DATABASE",
    427u16 => "KEY_NEWS",
    428u16 => "KEY_VOICEMAIL",
    429u16 => "KEY_ADDRESSBOOK",
    430u16 => "KEY_MESSENGER",
    431u16 => "KEY_DISPLAYTOGGLE",
    432u16 => "KEY_SPELLCHECK",
    433u16 => "KEY_LOGOFF",
    434u16 => "KEY_DOLLAR",
    435u16 => "KEY_EURO",
    436u16 => "KEY_FRAMEBACK",
    437u16 => "KEY_FRAMEFORWARD",
    438u16 => "KEY_CONTEXT_MENU",
    439u16 => "KEY_MEDIA_REPEAT",
    440u16 => "KEY_10CHANNELSUP",
    441u16 => "KEY_10CHANNELSDOWN",
    442u16 => "KEY_IMAGES",
    444u16 => "KEY_NOTIFICATION_CENTER",
    445u16 => "KEY_PICKUP_PHONE",
    446u16 => "KEY_HANGUP_PHONE",
    447u16 => "KEY_LINK_PHONE",
    448u16 => "KEY_DEL_EOL",
    449u16 => "KEY_DEL_EOS",
    450u16 => "KEY_INS_LINE",
    451u16 => "KEY_DEL_LINE",
    464u16 => "KEY_FN",
    465u16 => "KEY_FN_ESC",
    466u16 => "KEY_FN_F1",
    467u16 => "KEY_FN_F2",
    468u16 => "KEY_FN_F3",
    469u16 => "KEY_FN_F4",
    470u16 => "KEY_FN_F5",
    471u16 => "KEY_FN_F6",
    472u16 => "KEY_FN_F7",
    473u16 => "KEY_FN_F8",
    474u16 => "KEY_FN_F9",
    475u16 => "KEY_FN_F10",
    476u16 => "KEY_FN_F11",
    477u16 => "KEY_FN_F12",
    478u16 => "KEY_FN_1",
    479u16 => "KEY_FN_2",
    480u16 => "KEY_FN_D",
    481u16 => "KEY_FN_E",
    482u16 => "KEY_FN_F",
    483u16 => "KEY_FN_S",
    484u16 => "KEY_FN_B",
    485u16 => "KEY_FN_RIGHT_SHIFT",
    497u16 => "KEY_BRL_DOT1",
    498u16 => "KEY_BRL_DOT2",
    499u16 => "KEY_BRL_DOT3",
    500u16 => "KEY_BRL_DOT4",
    501u16 => "KEY_BRL_DOT5",
    502u16 => "KEY_BRL_DOT6",
    503u16 => "KEY_BRL_DOT7",
    504u16 => "KEY_BRL_DOT8",
    505u16 => "KEY_BRL_DOT9",
    506u16 => "KEY_BRL_DOT10",
    512u16 => "KEY_NUMERIC_0",
    513u16 => "KEY_NUMERIC_1",
    514u16 => "KEY_NUMERIC_2",
    515u16 => "KEY_NUMERIC_3",
    516u16 => "KEY_NUMERIC_4",
    517u16 => "KEY_NUMERIC_5",
    518u16 => "KEY_NUMERIC_6",
    519u16 => "KEY_NUMERIC_7",
    520u16 => "KEY_NUMERIC_8",
    521u16 => "KEY_NUMERIC_9",
    522u16 => "KEY_NUMERIC_STAR",
    523u16 => "KEY_NUMERIC_POUND",
    524u16 => "KEY_NUMERIC_A",
    525u16 => "KEY_NUMERIC_B",
    526u16 => "KEY_NUMERIC_C",
    527u16 => "KEY_NUMERIC_D",
    528u16 => "KEY_CAMERA_FOCUS",
    529u16 => "KEY_WPS_BUTTON",
    530u16 => "KEY_TOUCHPAD_TOGGLE",
    531u16 => "KEY_TOUCHPAD_ON",
    532u16 => "KEY_TOUCHPAD_OFF",
    533u16 => "KEY_CAMERA_ZOOMIN",
    534u16 => "KEY_CAMERA_ZOOMOUT",
    535u16 => "KEY_CAMERA_UP",
    536u16 => "KEY_CAMERA_DOWN",
    537u16 => "KEY_CAMERA_LEFT",
    538u16 => "KEY_CAMERA_RIGHT",
    539u16 => "KEY_ATTENDANT_ON",
    540u16 => "KEY_ATTENDANT_OFF",
    541u16 => "KEY_ATTENDANT_TOGGLE",
    542u16 => "KEY_LIGHTS_TOGGLE",
    544u16 => "BTN_DPAD_UP",
    545u16 => "BTN_DPAD_DOWN",
    546u16 => "BTN_DPAD_LEFT",
    547u16 => "BTN_DPAD_RIGHT",
    560u16 => "KEY_ALS_TOGGLE",
    561u16 => "KEY_ROTATE_LOCK_TOGGLE",
    562u16 => "KEY_REFRESH_RATE_TOGGLE",
    576u16 => "KEY_BUTTONCONFIG",
    577u16 => "KEY_TASKMANAGER",
    578u16 => "KEY_JOURNAL",
    579u16 => "KEY_CONTROLPANEL",
    580u16 => "KEY_APPSELECT",
    581u16 => "KEY_SCREENSAVER",
    582u16 => "KEY_VOICECOMMAND",
    583u16 => "KEY_ASSISTANT",
    584u16 => "KEY_KBD_LAYOUT_NEXT",
    585u16 => "KEY_EMOJI_PICKER",
    586u16 => "KEY_DICTATE",
    592u16 => "KEY_BRIGHTNESS_MIN",
    593u16 => "KEY_BRIGHTNESS_MAX",
    608u16 => "KEY_KBDINPUTASSIST_PREV",
    609u16 => "KEY_KBDINPUTASSIST_NEXT",
    610u16 => "KEY_KBDINPUTASSIST_PREVGROUP",
    611u16 => "KEY_KBDINPUTASSIST_NEXTGROUP",
    612u16 => "KEY_KBDINPUTASSIST_ACCEPT",
    613u16 => "KEY_KBDINPUTASSIST_CANCEL",
    614u16 => "KEY_RIGHT_UP",
    615u16 => "KEY_RIGHT_DOWN",
    616u16 => "KEY_LEFT_UP",
    617u16 => "KEY_LEFT_DOWN",
    618u16 => "KEY_ROOT_MENU",
    619u16 => "KEY_MEDIA_TOP_MENU",
    620u16 => "KEY_NUMERIC_11",
    621u16 => "KEY_NUMERIC_12",
    622u16 => "KEY_AUDIO_DESC",
    623u16 => "KEY_3D_MODE",
    624u16 => "KEY_NEXT_FAVORITE",
    625u16 => "KEY_STOP_RECORD",
    626u16 => "KEY_PAUSE_RECORD",
    627u16 => "KEY_VOD",
    628u16 => "KEY_UNMUTE",
    629u16 => "KEY_FASTREVERSE",
    630u16 => "KEY_SLOWREVERSE",
    631u16 => "KEY_DATA",
    632u16 => "KEY_ONSCREEN_KEYBOARD",
    633u16 => "KEY_PRIVACY_SCREEN_TOGGLE",
    634u16 => "KEY_SELECTIVE_SCREENSHOT",
    635u16 => "KEY_NEXT_ELEMENT",
    636u16 => "KEY_PREVIOUS_ELEMENT",
    637u16 => "KEY_AUTOPILOT_ENGAGE_TOGGLE",
    638u16 => "KEY_MARK_WAYPOINT",
    639u16 => "KEY_SOS",
    640u16 => "KEY_NAV_CHART",
    641u16 => "KEY_FISHING_CHART",
    642u16 => "KEY_SINGLE_RANGE_RADAR",
    643u16 => "KEY_DUAL_RANGE_RADAR",
    644u16 => "KEY_RADAR_OVERLAY",
    645u16 => "KEY_TRADITIONAL_SONAR",
    646u16 => "KEY_CLEARVU_SONAR",
    647u16 => "KEY_SIDEVU_SONAR",
    648u16 => "KEY_NAV_INFO",
    649u16 => "KEY_BRIGHTNESS_MENU",
    656u16 => "KEY_MACRO1",
    657u16 => "KEY_MACRO2",
    658u16 => "KEY_MACRO3",
    659u16 => "KEY_MACRO4",
    660u16 => "KEY_MACRO5",
    661u16 => "KEY_MACRO6",
    662u16 => "KEY_MACRO7",
    663u16 => "KEY_MACRO8",
    664u16 => "KEY_MACRO9",
    665u16 => "KEY_MACRO10",
    666u16 => "KEY_MACRO11",
    667u16 => "KEY_MACRO12",
    668u16 => "KEY_MACRO13",
    669u16 => "KEY_MACRO14",
    670u16 => "KEY_MACRO15",
    671u16 => "KEY_MACRO16",
    672u16 => "KEY_MACRO17",
    673u16 => "KEY_MACRO18",
    674u16 => "KEY_MACRO19",
    675u16 => "KEY_MACRO20",
    676u16 => "KEY_MACRO21",
    677u16 => "KEY_MACRO22",
    678u16 => "KEY_MACRO23",
    679u16 => "KEY_MACRO24",
    680u16 => "KEY_MACRO25",
    681u16 => "KEY_MACRO26",
    682u16 => "KEY_MACRO27",
    683u16 => "KEY_MACRO28",
    684u16 => "KEY_MACRO29",
    685u16 => "KEY_MACRO30",
    688u16 => "KEY_MACRO_RECORD_START",
    689u16 => "KEY_MACRO_RECORD_STOP",
    690u16 => "KEY_MACRO_PRESET_CYCLE",
    691u16 => "KEY_MACRO_PRESET1",
    692u16 => "KEY_MACRO_PRESET2",
    693u16 => "KEY_MACRO_PRESET3",
    696u16 => "KEY_KBD_LCD_MENU1",
    697u16 => "KEY_KBD_LCD_MENU2",
    698u16 => "KEY_KBD_LCD_MENU3",
    699u16 => "KEY_KBD_LCD_MENU4",
    700u16 => "KEY_KBD_LCD_MENU5",
    704u16 => "BTN_TRIGGER_HAPPY1",
    705u16 => "BTN_TRIGGER_HAPPY2",
    706u16 => "BTN_TRIGGER_HAPPY3",
    707u16 => "BTN_TRIGGER_HAPPY4",
    708u16 => "BTN_TRIGGER_HAPPY5",
    709u16 => "BTN_TRIGGER_HAPPY6",
    710u16 => "BTN_TRIGGER_HAPPY7",
    711u16 => "BTN_TRIGGER_HAPPY8",
    712u16 => "BTN_TRIGGER_HAPPY9",
    713u16 => "BTN_TRIGGER_HAPPY10",
    714u16 => "BTN_TRIGGER_HAPPY11",
    715u16 => "BTN_TRIGGER_HAPPY12",
    716u16 => "BTN_TRIGGER_HAPPY13",
    717u16 => "BTN_TRIGGER_HAPPY14",
    718u16 => "BTN_TRIGGER_HAPPY15",
    719u16 => "BTN_TRIGGER_HAPPY16",
    720u16 => "BTN_TRIGGER_HAPPY17",
    721u16 => "BTN_TRIGGER_HAPPY18",
    722u16 => "BTN_TRIGGER_HAPPY19",
    723u16 => "BTN_TRIGGER_HAPPY20",
    724u16 => "BTN_TRIGGER_HAPPY21",
    725u16 => "BTN_TRIGGER_HAPPY22",
    726u16 => "BTN_TRIGGER_HAPPY23",
    727u16 => "BTN_TRIGGER_HAPPY24",
    728u16 => "BTN_TRIGGER_HAPPY25",
    729u16 => "BTN_TRIGGER_HAPPY26",
    730u16 => "BTN_TRIGGER_HAPPY27",
    731u16 => "BTN_TRIGGER_HAPPY28",
    732u16 => "BTN_TRIGGER_HAPPY29",
    733u16 => "BTN_TRIGGER_HAPPY30",
    734u16 => "BTN_TRIGGER_HAPPY31",
    735u16 => "BTN_TRIGGER_HAPPY32",
    736u16 => "BTN_TRIGGER_HAPPY33",
    737u16 => "BTN_TRIGGER_HAPPY34",
    738u16 => "BTN_TRIGGER_HAPPY35",
    739u16 => "BTN_TRIGGER_HAPPY36",
    740u16 => "BTN_TRIGGER_HAPPY37",
    741u16 => "BTN_TRIGGER_HAPPY38",
    742u16 => "BTN_TRIGGER_HAPPY39",
    743u16 => "BTN_TRIGGER_HAPPY40",
};

/// Every `KEY_*`/`BTN_*` name, aliases and range markers included.
static KEY_CODES: phf::Map<&'static str, u16> = phf::phf_map! {
    "KEY_RESERVED" => 0u16,
    "KEY_ESC" => 1u16,
    "KEY_1" => 2u16,
    "KEY_2" => 3u16,
    "KEY_3" => 4u16,
    "KEY_4" => 5u16,
    "KEY_5" => 6u16,
    "KEY_6" => 7u16,
    "KEY_7" => 8u16,
    "KEY_8" => 9u16,
    "KEY_9" => 10u16,
    "KEY_0" => 11u16,
    "KEY_MINUS" => 12u16,
    "KEY_EQUAL" => 13u16,
    "KEY_BACKSPACE" => 14u16,
    "KEY_TAB" => 15u16,
    "KEY_Q" => 16u16,
    "KEY_W" => 17u16,
    "KEY_E" => 18u16,
    "KEY_R" => 19u16,
    "KEY_T" => 20u16,
    "KEY_Y" => 21u16,
    "KEY_U" => 22u16,
    "KEY_I" => 23u16,
    "KEY_O" => 24u16,
    "KEY_P" => 25u16,
    "KEY_LEFTBRACE" => 26u16,
    "KEY_RIGHTBRACE" => 27u16,
    "KEY_ENTER" => 28u16,
    "KEY_LEFTCTRL" => 29u16,
    "KEY_A" => 30u16,
    "KEY_S" => 31u16,
    "KEY_D" => 32u16,
    "KEY_F" => 33u16,
    "KEY_G" => 34u16,
    "KEY_H" => 35u16,
    "KEY_J" => 36u16,
    "KEY_K" => 37u16,
    "KEY_L" => 38u16,
    "KEY_SEMICOLON" => 39u16,
    "KEY_APOSTROPHE" => 40u16,
    "KEY_GRAVE" => 41u16,
    "KEY_LEFTSHIFT" => 42u16,
    "KEY_BACKSLASH" => 43u16,
    "KEY_Z" => 44u16,
    "KEY_X" => 45u16,
    "KEY_C" => 46u16,
    "KEY_V" => 47u16,
    "KEY_B" => 48u16,
    "KEY_N" => 49u16,
    "KEY_M" => 50u16,
    "KEY_COMMA" => 51u16,
    "KEY_DOT" => 52u16,
    "KEY_SLASH" => 53u16,
    "KEY_RIGHTSHIFT" => 54u16,
    "KEY_KPASTERISK" => 55u16,
    "KEY_LEFTALT" => 56u16,
    "KEY_SPACE" => 57u16,
    "KEY_CAPSLOCK" => 58u16,
    "KEY_F1" => 59u16,
    "KEY_F2" => 60u16,
    "KEY_F3" => 61u16,
    "KEY_F4" => 62u16,
    "KEY_F5" => 63u16,
    "KEY_F6" => 64u16,
    "KEY_F7" => 65u16,
    "KEY_F8" => 66u16,
    "KEY_F9" => 67u16,
    "KEY_F10" => 68u16,
    "KEY_NUMLOCK" => 69u16,
    "KEY_SCROLLLOCK" => 70u16,
    "KEY_KP7" => 71u16,
    "KEY_KP8" => 72u16,
    "KEY_KP9" => 73u16,
    "KEY_KPMINUS" => 74u16,
    "KEY_KP4" => 75u16,
    "KEY_KP5" => 76u16,
    "KEY_KP6" => 77u16,
    "KEY_KPPLUS" => 78u16,
    "KEY_KP1" => 79u16,
    "KEY_KP2" => 80u16,
    "KEY_KP3" => 81u16,
    "KEY_KP0" => 82u16,
    "KEY_KPDOT" => 83u16,
    "KEY_ZENKAKUHANKAKU" => 85u16,
    "KEY_102ND" => 86u16,
    "KEY_F11" => 87u16,
    "KEY_F12" => 88u16,
    "KEY_RO" => 89u16,
    "KEY_KATAKANA" => 90u16,
    "KEY_HIRAGANA" => 91u16,
    "KEY_HENKAN" => 92u16,
    "KEY_KATAKANAHIRAGANA" => 93u16,
    "KEY_MUHENKAN" => 94u16,
    "KEY_KPJPCOMMA" => 95u16,
    "KEY_KPENTER" => 96u16,
    "KEY_RIGHTCTRL" => 97u16,
    "KEY_KPSLASH" => 98u16,
    "KEY_SYSRQ" => 99u16,
    "KEY_RIGHTALT" => 100u16,
    "KEY_LINEFEED" => 101u16,
    "KEY_HOME" => 102u16,
    "KEY_UP" => 103u16,
    "KEY_PAGEUP" => 104u16,
    "KEY_LEFT" => 105u16,
    "KEY_RIGHT" => 106u16,
    "KEY_END" => 107u16,
    "KEY_DOWN" => 108u16,
    "KEY_PAGEDOWN" => 109u16,
    "KEY_INSERT" => 110u16,
    "KEY_DELETE" => 111u16,
    "KEY_MACRO" => 112u16,
    "KEY_MIN_INTERESTING" => 113u16,
    "KEY_MUTE" => 113u16,
    "KEY_VOLUMEDOWN" => 114u16,
    "KEY_VOLUMEUP" => 115u16,
    "KEY_POWER" => 116u16,
    "KEY_KPEQUAL" => 117u16,
    "KEY_KPPLUSMINUS" => 118u16,
    "KEY_PAUSE" => 119u16,
    "KEY_SCALE" => 120u16,
    "KEY_KPCOMMA" => 121u16,
    "KEY_HANGEUL" => 122u16,
    "KEY_HANGUEL" => 122u16,
    "KEY_HANJA" => 123u16,
    "KEY_YEN" => 124u16,
    "KEY_LEFTMETA" => 125u16,
    "KEY_RIGHTMETA" => 126u16,
    "KEY_COMPOSE" => 127u16,
    "KEY_STOP" => 128u16,
    "KEY_AGAIN" => 129u16,
    "KEY_PROPS" => 130u16,
    "KEY_UNDO" => 131u16,
    "KEY_FRONT" => 132u16,
    "KEY_COPY" => 133u16,
    "KEY_OPEN" => 134u16,
    "KEY_PASTE" => 135u16,
    "KEY_FIND" => 136u16,
    "KEY_CUT" => 137u16,
    "KEY_HELP" => 138u16,
    "KEY_MENU" => 139u16,
    "KEY_CALC" => 140u16,
    "KEY_SETUP" => 141u16,
    "KEY_SLEEP" => 142u16,
    "KEY_WAKEUP" => 143u16,
    "KEY_FILE" => 144u16,
    "KEY_SENDFILE" => 145u16,
    "KEY_DELETEFILE" => 146u16,
    "KEY_XFER" => 147u16,
    "KEY_PROG1" => 148u16,
    "KEY_PROG2" => 149u16,
    "KEY_WWW" => 150u16,
    "KEY_MSDOS" => 151u16,
    "KEY_COFFEE" => 152u16,
    "KEY_SCREENLOCK" => 152u16,
    "KEY_DIRECTION" => 153u16,
    "KEY_ROTATE_DISPLAY" => 153u16,
    "KEY_CYCLEWINDOWS" => 154u16,
    "KEY_MAIL" => 155u16,
    "KEY_BOOKMARKS" => 156u16,
    "KEY_COMPUTER" => 157u16,
    "KEY_BACK" => 158u16,
    "KEY_FORWARD" => 159u16,
    "KEY_CLOSECD" => 160u16,
    "KEY_EJECTCD" => 161u16,
    "KEY_EJECTCLOSECD" => 162u16,
    "KEY_NEXTSONG" => 163u16,
    "KEY_PLAYPAUSE" => 164u16,
    "KEY_PREVIOUSSONG" => 165u16,
    "KEY_STOPCD" => 166u16,
    "KEY_RECORD" => 167u16,
    "KEY_REWIND" => 168u16,
    "KEY_PHONE" => 169u16,
    "KEY_ISO" => 170u16,
    "KEY_CONFIG" => 171u16,
    "KEY_HOMEPAGE" => 172u16,
    "KEY_REFRESH" => 173u16,
    "KEY_EXIT" => 174u16,
    "KEY_MOVE" => 175u16,
    "KEY_EDIT" => 176u16,
    "KEY_SCROLLUP" => 177u16,
    "KEY_SCROLLDOWN" => 178u16,
    "KEY_KPLEFTPAREN" => 179u16,
    "KEY_KPRIGHTPAREN" => 180u16,
    "KEY_NEW" => 181u16,
    "KEY_REDO" => 182u16,
    "KEY_F13" => 183u16,
    "KEY_F14" => 184u16,
    "KEY_F15" => 185u16,
    "KEY_F16" => 186u16,
    "KEY_F17" => 187u16,
    "KEY_F18" => 188u16,
    "KEY_F19" => 189u16,
    "KEY_F20" => 190u16,
    "KEY_F21" => 191u16,
    "KEY_F22" => 192u16,
    "KEY_F23" => 193u16,
    "KEY_F24" => 194u16,
    "KEY_PLAYCD" => 200u16,
    "KEY_PAUSECD" => 201u16,
    "KEY_PROG3" => 202u16,
    "KEY_PROG4" => 203u16,
    "KEY_ALL_APPLICATIONS" => 204u16,
    "KEY_DASHBOARD" => 204u16,
    "KEY_SUSPEND" => 205u16,
    "KEY_CLOSE" => 206u16,
    "KEY_PLAY" => 207u16,
    "KEY_FASTFORWARD" => 208u16,
    "KEY_BASSBOOST" => 209u16,
    "KEY_PRINT" => 210u16,
    "KEY_HP" => 211u16,
    "KEY_CAMERA" => 212u16,
    "KEY_SOUND" => 213u16,
    "KEY_QUESTION" => 214u16,
    "KEY_EMAIL" => 215u16,
    "KEY_CHAT" => 216u16,
    "KEY_SEARCH" => 217u16,
    "KEY_CONNECT" => 218u16,
    "KEY_FINANCE" => 219u16,
    "KEY_SPORT" => 220u16,
    "KEY_SHOP" => 221u16,
    "KEY_ALTERASE" => 222u16,
    "KEY_CANCEL" => 223u16,
    "KEY_BRIGHTNESSDOWN" => 224u16,
    "KEY_BRIGHTNESSUP" => 225u16,
    "KEY_MEDIA" => 226u16,
    "KEY_SWITCHVIDEOMODE" => 227u16,
    "KEY_KBDILLUMTOGGLE" => 228u16,
    "KEY_KBDILLUMDOWN" => 229u16,
    "KEY_KBDILLUMUP" => 230u16,
    "KEY_SEND" => 231u16,
    "KEY_REPLY" => 232u16,
    "KEY_FORWARDMAIL" => 233u16,
    "KEY_SAVE" => 234u16,
    "KEY_DOCUMENTS" => 235u16,
    "KEY_BATTERY" => 236u16,
    "KEY_BLUETOOTH" => 237u16,
    "KEY_WLAN" => 238u16,
    "KEY_UWB" => 239u16,
    "KEY_UNKNOWN" => 240u16,
    "KEY_VIDEO_NEXT" => 241u16,
    "KEY_VIDEO_PREV" => 242u16,
    "KEY_BRIGHTNESS_CYCLE" => 243u16,
    "KEY_BRIGHTNESS_AUTO" => 244u16,
    "KEY_BRIGHTNESS_ZERO" => 244u16,
    "KEY_DISPLAY_OFF" => 245u16,
    "KEY_WIMAX" => 246u16,
    "KEY_WWAN" => 246u16,
    "KEY_RFKILL" => 247u16,
    "KEY_MICMUTE" => 248u16,
    "BTN_0" => 256u16,
    "BTN_MISC" => 256u16,
    "BTN_1" => 257u16,
    "BTN_2" => 258u16,
    "BTN_3" => 259u16,
    "BTN_4" => 260u16,
    "BTN_5" => 261u16,
    "BTN_6" => 262u16,
    "BTN_7" => 263u16,
    "BTN_8" => 264u16,
    "BTN_9" => 265u16,
    "BTN_LEFT" => 272u16,
    "BTN_MOUSE" => 272u16,
    "BTN_RIGHT" => 273u16,
    "BTN_MIDDLE" => 274u16,
    "BTN_SIDE" => 275u16,
    "BTN_EXTRA" => 276u16,
    "BTN_FORWARD" => 277u16,
    "BTN_BACK" => 278u16,
    "BTN_TASK" => 279u16,
    "BTN_JOYSTICK" => 288u16,
    "BTN_TRIGGER" => 288u16,
    "BTN_THUMB" => 289u16,
    "BTN_THUMB2" => 290u16,
    "BTN_TOP" => 291u16,
    "BTN_TOP2" => 292u16,
    "BTN_PINKIE" => 293u16,
    "BTN_BASE" => 294u16,
    "BTN_BASE2" => 295u16,
    "BTN_BASE3" => 296u16,
    "BTN_BASE4" => 297u16,
    "BTN_BASE5" => 298u16,
    "BTN_BASE6" => 299u16,
    "BTN_DEAD" => 303u16,
    "BTN_A" => 304u16,
    "BTN_GAMEPAD" => 304u16,
    "BTN_SOUTH" => 304u16,
    "BTN_B" => 305u16,
    "BTN_EAST" => 305u16,
    "BTN_C" => 306u16,
    "BTN_NORTH" => 307u16,
    "BTN_X" => 307u16,
    "BTN_WEST" => 308u16,
    "BTN_Y" => 308u16,
    "BTN_Z" => 309u16,
    "BTN_TL" => 310u16,
    "BTN_TR" => 311u16,
    "BTN_TL2" => 312u16,
    "BTN_TR2" => 313u16,
    "BTN_SELECT" => 314u16,
    "BTN_START" => 315u16,
    "BTN_MODE" => 316u16,
    "BTN_THUMBL" => 317u16,
    "BTN_THUMBR" => 318u16,
    "BTN_DIGI" => 320u16,
    "BTN_TOOL_PEN" => 320u16,
    "BTN_TOOL_RUBBER" => 321u16,
    "BTN_TOOL_BRUSH" => 322u16,
    "BTN_TOOL_PENCIL" => 323u16,
    "BTN_TOOL_AIRBRUSH" => 324u16,
    "BTN_TOOL_FINGER" => 325u16,
    "BTN_TOOL_MOUSE" => 326u16,
    "BTN_TOOL_LENS" => 327u16,
    "BTN_TOOL_QUINTTAP" => 328u16,
    "BTN_STYLUS3" => 329u16,
    "BTN_TOUCH" => 330u16,
    "BTN_STYLUS" => 331u16,
    "BTN_STYLUS2" => 332u16,
    "BTN_TOOL_DOUBLETAP" => 333u16,
    "BTN_TOOL_TRIPLETAP" => 334u16,
    "BTN_TOOL_QUADTAP" => 335u16,
    "BTN_GEAR_DOWN" => 336u16,
    "BTN_WHEEL" => 336u16,
    "BTN_GEAR_UP" => 337u16,
    "KEY_OK" => 352u16,
    "KEY_SELECT" => 353u16,
    "KEY_GOTO" => 354u16,
    "KEY_CLEAR" => 355u16,
    "KEY_POWER2" => 356u16,
    "KEY_OPTION" => 357u16,
    "KEY_INFO" => 358u16,
    "KEY_TIME" => 359u16,
    "KEY_VENDOR" => 360u16,
    "KEY_ARCHIVE" => 361u16,
    "KEY_PROGRAM" => 362u16,
    "KEY_CHANNEL" => 363u16,
    "KEY_FAVORITES" => 364u16,
    "KEY_EPG" => 365u16,
    "KEY_PVR" => 366u16,
    "KEY_MHP" => 367u16,
    "KEY_LANGUAGE" => 368u16,
    "KEY_TITLE" => 369u16,
    "KEY_SUBTITLE" => 370u16,
    "KEY_ANGLE" => 371u16,
    "KEY_FULL_SCREEN" => 372u16,
    "KEY_ZOOM" => 372u16,
    "KEY_MODE" => 373u16,
    "KEY_KEYBOARD" => 374u16,
    "KEY_ASPECT_RATIO" => 375u16,
    "KEY_SCREEN" => 375u16,
    "KEY_PC" => 376u16,
    "KEY_TV" => 377u16,
    "KEY_TV2" => 378u16,
    "KEY_VCR" => 379u16,
    "KEY_VCR2" => 380u16,
    "KEY_SAT" => 381u16,
    "KEY_SAT2" => 382u16,
    "KEY_CD" => 383u16,
    "KEY_TAPE" => 384u16,
    "KEY_RADIO" => 385u16,
    "KEY_TUNER" => 386u16,
    "KEY_PLAYER" => 387u16,
    "KEY_TEXT" => 388u16,
    "KEY_DVD" => 389u16,
    "KEY_AUX" => 390u16,
    "KEY_MP3" => 391u16,
    "KEY_AUDIO" => 392u16,
    "KEY_VIDEO" => 393u16,
    "KEY_DIRECTORY" => 394u16,
    "KEY_LIST" => 395u16,
    "KEY_MEMO" => 396u16,
    "KEY_CALENDAR" => 397u16,
    "KEY_RED" => 398u16,
    "KEY_GREEN" => 399u16,
    "KEY_YELLOW" => 400u16,
    "KEY_BLUE" => 401u16,
    "KEY_CHANNELUP" => 402u16,
    "KEY_CHANNELDOWN" => 403u16,
    "KEY_FIRST" => 404u16,
    "KEY_LAST" => 405u16,
    "KEY_AB" => 406u16,
    "KEY_NEXT" => 407u16,
    "KEY_RESTART" => 408u16,
    "KEY_SLOW" => 409u16,
    "KEY_SHUFFLE" => 410u16,
    "KEY_BREAK" => 411u16,
    "KEY_PREVIOUS" => 412u16,
    "KEY_DIGITS" => 413u16,
    "KEY_TEEN" => 414u16,
    "KEY_TWEN" => 415u16,
    "KEY_VIDEOPHONE" => 416u16,
    "KEY_GAMES" => 417u16,
    "KEY_ZOOMIN" => 418u16,
    "KEY_ZOOMOUT" => 419u16,
    "KEY_ZOOMRESET" => 420u16,
    "KEY_WORDPROCESSOR" => 421u16,
    "KEY_EDITOR" => 422u16,
    "KEY_SPREADSHEET" => 423u16,
    "KEY_GRAPHICSEDITOR" => 424u16,
    "KEY_PRESENTATION" => 425u16,
    "KEY_DATABASE" => 426u16,
    "KEY_NEWS" => 427u16,
    "KEY_VOICEMAIL" => 428u16,
    "KEY_ADDRESSBOOK" => 429u16,
    "KEY_MESSENGER" => 430u16,
    "KEY_BRIGHTNESS_TOGGLE" => 431u16,
    "KEY_DISPLAYTOGGLE" => 431u16,
    "KEY_SPELLCHECK" => 432u16,
    "KEY_LOGOFF" => 433u16,
    "KEY_DOLLAR" => 434u16,
    "KEY_EURO" => 435u16,
    "KEY_FRAMEBACK" => 436u16,
    "KEY_FRAMEFORWARD" => 437u16,
    "KEY_CONTEXT_MENU" => 438u16,
    "KEY_MEDIA_REPEAT" => 439u16,
    "KEY_10CHANNELSUP" => 440u16,
    "KEY_10CHANNELSDOWN" => 441u16,
    "KEY_IMAGES" => 442u16,
    "KEY_NOTIFICATION_CENTER" => 444u16,
    "KEY_PICKUP_PHONE" => 445u16,
    "KEY_HANGUP_PHONE" => 446u16,
    "KEY_LINK_PHONE" => 447u16,
    "KEY_DEL_EOL" => 448u16,
    "KEY_DEL_EOS" => 449u16,
    "KEY_INS_LINE" => 450u16,
    "KEY_DEL_LINE" => 451u16,
    "KEY_FN" => 464u16,
    "KEY_FN_ESC" => 465u16,
    "KEY_FN_F1" => 466u16,
    "KEY_FN_F2" => 467u16,
    "KEY_FN_F3" => 468u16,
    "KEY_FN_F4" => 469u16,
    "KEY_FN_F5" => 470u16,
    "KEY_FN_F6" => 471u16,
    "KEY_FN_F7" => 472u16,
    "KEY_FN_F8" => 473u16,
    "KEY_FN_F9" => 474u16,
    "KEY_FN_F10" => 475u16,
    "KEY_FN_F11" => 476u16,
    "KEY_FN_F12" => 477u16,
    "KEY_FN_1" => 478u16,
    "KEY_FN_2" => 479u16,
    "KEY_FN_D" => 480u16,
    "KEY_FN_E" => 481u16,
    "KEY_FN_F" => 482u16,
    "KEY_FN_S" => 483u16,
    "KEY_FN_B" => 484u16,
    "KEY_FN_RIGHT_SHIFT" => 485u16,
    "KEY_BRL_DOT1" => 497u16,
    "KEY_BRL_DOT2" => 498u16,
    "KEY_BRL_DOT3" => 499u16,
    "KEY_BRL_DOT4" => 500u16,
    "KEY_BRL_DOT5" => 501u16,
    "KEY_BRL_DOT6" => 502u16,
    "KEY_BRL_DOT7" => 503u16,
    "KEY_BRL_DOT8" => 504u16,
    "KEY_BRL_DOT9" => 505u16,
    "KEY_BRL_DOT10" => 506u16,
    "KEY_NUMERIC_0" => 512u16,
    "KEY_NUMERIC_1" => 513u16,
    "KEY_NUMERIC_2" => 514u16,
    "KEY_NUMERIC_3" => 515u16,
    "KEY_NUMERIC_4" => 516u16,
    "KEY_NUMERIC_5" => 517u16,
    "KEY_NUMERIC_6" => 518u16,
    "KEY_NUMERIC_7" => 519u16,
    "KEY_NUMERIC_8" => 520u16,
    "KEY_NUMERIC_9" => 521u16,
    "KEY_NUMERIC_STAR" => 522u16,
    "KEY_NUMERIC_POUND" => 523u16,
    "KEY_NUMERIC_A" => 524u16,
    "KEY_NUMERIC_B" => 525u16,
    "KEY_NUMERIC_C" => 526u16,
    "KEY_NUMERIC_D" => 527u16,
    "KEY_CAMERA_FOCUS" => 528u16,
    "KEY_WPS_BUTTON" => 529u16,
    "KEY_TOUCHPAD_TOGGLE" => 530u16,
    "KEY_TOUCHPAD_ON" => 531u16,
    "KEY_TOUCHPAD_OFF" => 532u16,
    "KEY_CAMERA_ZOOMIN" => 533u16,
    "KEY_CAMERA_ZOOMOUT" => 534u16,
    "KEY_CAMERA_UP" => 535u16,
    "KEY_CAMERA_DOWN" => 536u16,
    "KEY_CAMERA_LEFT" => 537u16,
    "KEY_CAMERA_RIGHT" => 538u16,
    "KEY_ATTENDANT_ON" => 539u16,
    "KEY_ATTENDANT_OFF" => 540u16,
    "KEY_ATTENDANT_TOGGLE" => 541u16,
    "KEY_LIGHTS_TOGGLE" => 542u16,
    "BTN_DPAD_UP" => 544u16,
    "BTN_DPAD_DOWN" => 545u16,
    "BTN_DPAD_LEFT" => 546u16,
    "BTN_DPAD_RIGHT" => 547u16,
    "KEY_ALS_TOGGLE" => 560u16,
    "KEY_ROTATE_LOCK_TOGGLE" => 561u16,
    "KEY_REFRESH_RATE_TOGGLE" => 562u16,
    "KEY_BUTTONCONFIG" => 576u16,
    "KEY_TASKMANAGER" => 577u16,
    "KEY_JOURNAL" => 578u16,
    "KEY_CONTROLPANEL" => 579u16,
    "KEY_APPSELECT" => 580u16,
    "KEY_SCREENSAVER" => 581u16,
    "KEY_VOICECOMMAND" => 582u16,
    "KEY_ASSISTANT" => 583u16,
    "KEY_KBD_LAYOUT_NEXT" => 584u16,
    "KEY_EMOJI_PICKER" => 585u16,
    "KEY_DICTATE" => 586u16,
    "KEY_BRIGHTNESS_MIN" => 592u16,
    "KEY_BRIGHTNESS_MAX" => 593u16,
    "KEY_KBDINPUTASSIST_PREV" => 608u16,
    "KEY_KBDINPUTASSIST_NEXT" => 609u16,
    "KEY_KBDINPUTASSIST_PREVGROUP" => 610u16,
    "KEY_KBDINPUTASSIST_NEXTGROUP" => 611u16,
    "KEY_KBDINPUTASSIST_ACCEPT" => 612u16,
    "KEY_KBDINPUTASSIST_CANCEL" => 613u16,
    "KEY_RIGHT_UP" => 614u16,
    "KEY_RIGHT_DOWN" => 615u16,
    "KEY_LEFT_UP" => 616u16,
    "KEY_LEFT_DOWN" => 617u16,
    "KEY_ROOT_MENU" => 618u16,
    "KEY_MEDIA_TOP_MENU" => 619u16,
    "KEY_NUMERIC_11" => 620u16,
    "KEY_NUMERIC_12" => 621u16,
    "KEY_AUDIO_DESC" => 622u16,
    "KEY_3D_MODE" => 623u16,
    "KEY_NEXT_FAVORITE" => 624u16,
    "KEY_STOP_RECORD" => 625u16,
    "KEY_PAUSE_RECORD" => 626u16,
    "KEY_VOD" => 627u16,
    "KEY_UNMUTE" => 628u16,
    "KEY_FASTREVERSE" => 629u16,
    "KEY_SLOWREVERSE" => 630u16,
    "KEY_DATA" => 631u16,
    "KEY_ONSCREEN_KEYBOARD" => 632u16,
    "KEY_PRIVACY_SCREEN_TOGGLE" => 633u16,
    "KEY_SELECTIVE_SCREENSHOT" => 634u16,
    "KEY_NEXT_ELEMENT" => 635u16,
    "KEY_PREVIOUS_ELEMENT" => 636u16,
    "KEY_AUTOPILOT_ENGAGE_TOGGLE" => 637u16,
    "KEY_MARK_WAYPOINT" => 638u16,
    "KEY_SOS" => 639u16,
    "KEY_NAV_CHART" => 640u16,
    "KEY_FISHING_CHART" => 641u16,
    "KEY_SINGLE_RANGE_RADAR" => 642u16,
    "KEY_DUAL_RANGE_RADAR" => 643u16,
    "KEY_RADAR_OVERLAY" => 644u16,
    "KEY_TRADITIONAL_SONAR" => 645u16,
    "KEY_CLEARVU_SONAR" => 646u16,
    "KEY_SIDEVU_SONAR" => 647u16,
    "KEY_NAV_INFO" => 648u16,
    "KEY_BRIGHTNESS_MENU" => 649u16,
    "KEY_MACRO1" => 656u16,
    "KEY_MACRO2" => 657u16,
    "KEY_MACRO3" => 658u16,
    "KEY_MACRO4" => 659u16,
    "KEY_MACRO5" => 660u16,
    "KEY_MACRO6" => 661u16,
    "KEY_MACRO7" => 662u16,
    "KEY_MACRO8" => 663u16,
    "KEY_MACRO9" => 664u16,
    "KEY_MACRO10" => 665u16,
    "KEY_MACRO11" => 666u16,
    "KEY_MACRO12" => 667u16,
    "KEY_MACRO13" => 668u16,
    "KEY_MACRO14" => 669u16,
    "KEY_MACRO15" => 670u16,
    "KEY_MACRO16" => 671u16,
    "KEY_MACRO17" => 672u16,
    "KEY_MACRO18" => 673u16,
    "KEY_MACRO19" => 674u16,
    "KEY_MACRO20" => 675u16,
    "KEY_MACRO21" => 676u16,
    "KEY_MACRO22" => 677u16,
    "KEY_MACRO23" => 678u16,
    "KEY_MACRO24" => 679u16,
    "KEY_MACRO25" => 680u16,
    "KEY_MACRO26" => 681u16,
    "KEY_MACRO27" => 682u16,
    "KEY_MACRO28" => 683u16,
    "KEY_MACRO29" => 684u16,
    "KEY_MACRO30" => 685u16,
    "KEY_MACRO_RECORD_START" => 688u16,
    "KEY_MACRO_RECORD_STOP" => 689u16,
    "KEY_MACRO_PRESET_CYCLE" => 690u16,
    "KEY_MACRO_PRESET1" => 691u16,
    "KEY_MACRO_PRESET2" => 692u16,
    "KEY_MACRO_PRESET3" => 693u16,
    "KEY_KBD_LCD_MENU1" => 696u16,
    "KEY_KBD_LCD_MENU2" => 697u16,
    "KEY_KBD_LCD_MENU3" => 698u16,
    "KEY_KBD_LCD_MENU4" => 699u16,
    "KEY_KBD_LCD_MENU5" => 700u16,
    "BTN_TRIGGER_HAPPY" => 704u16,
    "BTN_TRIGGER_HAPPY1" => 704u16,
    "BTN_TRIGGER_HAPPY2" => 705u16,
    "BTN_TRIGGER_HAPPY3" => 706u16,
    "BTN_TRIGGER_HAPPY4" => 707u16,
    "BTN_TRIGGER_HAPPY5" => 708u16,
    "BTN_TRIGGER_HAPPY6" => 709u16,
    "BTN_TRIGGER_HAPPY7" => 710u16,
    "BTN_TRIGGER_HAPPY8" => 711u16,
    "BTN_TRIGGER_HAPPY9" => 712u16,
    "BTN_TRIGGER_HAPPY10" => 713u16,
    "BTN_TRIGGER_HAPPY11" => 714u16,
    "BTN_TRIGGER_HAPPY12" => 715u16,
    "BTN_TRIGGER_HAPPY13" => 716u16,
    "BTN_TRIGGER_HAPPY14" => 717u16,
    "BTN_TRIGGER_HAPPY15" => 718u16,
    "BTN_TRIGGER_HAPPY16" => 719u16,
    "BTN_TRIGGER_HAPPY17" => 720u16,
    "BTN_TRIGGER_HAPPY18" => 721u16,
    "BTN_TRIGGER_HAPPY19" => 722u16,
    "BTN_TRIGGER_HAPPY20" => 723u16,
    "BTN_TRIGGER_HAPPY21" => 724u16,
    "BTN_TRIGGER_HAPPY22" => 725u16,
    "BTN_TRIGGER_HAPPY23" => 726u16,
    "BTN_TRIGGER_HAPPY24" => 727u16,
    "BTN_TRIGGER_HAPPY25" => 728u16,
    "BTN_TRIGGER_HAPPY26" => 729u16,
    "BTN_TRIGGER_HAPPY27" => 730u16,
    "BTN_TRIGGER_HAPPY28" => 731u16,
    "BTN_TRIGGER_HAPPY29" => 732u16,
    "BTN_TRIGGER_HAPPY30" => 733u16,
    "BTN_TRIGGER_HAPPY31" => 734u16,
    "BTN_TRIGGER_HAPPY32" => 735u16,
    "BTN_TRIGGER_HAPPY33" => 736u16,
    "BTN_TRIGGER_HAPPY34" => 737u16,
    "BTN_TRIGGER_HAPPY35" => 738u16,
    "BTN_TRIGGER_HAPPY36" => 739u16,
    "BTN_TRIGGER_HAPPY37" => 740u16,
    "BTN_TRIGGER_HAPPY38" => 741u16,
    "BTN_TRIGGER_HAPPY39" => 742u16,
    "BTN_TRIGGER_HAPPY40" => 743u16,
};

#[inline]
pub fn get_key_name(code: u16) -> &'static str {
    KEY_NAMES.get(&code).copied().unwrap_or("UNKNOWN")
}

/// Resolve a key identifier (numeric code or symbolic name) to a key code.
/// The lookup is case-insensitive for symbolic names.
#[inline]
pub fn resolve_key_code(identifier: &str) -> Option<u16> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(code) = trimmed.parse::<u16>() {
        return Some(code);
    }

    let normalized = trimmed.to_ascii_uppercase();
    KEY_CODES.get(normalized.as_str()).copied()
}

#[inline]
pub fn get_event_type_name(type_: u16) -> &'static str {
    match i32::from(type_) {
        EV_SYN => "EV_SYN",
        EV_KEY => "EV_KEY",
        EV_REL => "EV_REL",
        EV_ABS => "EV_ABS",
        EV_MSC => "EV_MSC",
        EV_LED => "EV_LED",
        _ => "Unknown",
    }
}

#[inline]
pub fn get_value_name(value: i32) -> &'static str {
    match value {
        0 => "Release",
        1 => "Press",
        2 => "Repeat",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_remote_keys_by_name() {
        assert_eq!(resolve_key_code("KEY_VOLUMEUP"), Some(115));
        assert_eq!(resolve_key_code("key_playpause"), Some(164));
        assert_eq!(resolve_key_code("BTN_LEFT"), Some(272));
        assert_eq!(resolve_key_code("KEY_NUMERIC_0"), Some(512));
    }

    #[test]
    fn resolves_remote_control_block() {
        assert_eq!(resolve_key_code("KEY_OK"), Some(0x160));
        assert_eq!(resolve_key_code("KEY_EXIT"), Some(174));
        assert_eq!(resolve_key_code("KEY_PROGRAM"), Some(0x16a));
        assert_eq!(resolve_key_code("KEY_FAVORITES"), Some(0x16c));
        assert_eq!(resolve_key_code("KEY_TEXT"), Some(0x184));
        assert_eq!(resolve_key_code("KEY_LAST"), Some(0x195));
        assert_eq!(resolve_key_code("KEY_NUMERIC_STAR"), Some(0x20a));
        assert_eq!(resolve_key_code("KEY_SETUP"), Some(141));
    }

    #[test]
    fn resolves_media_keys() {
        assert_eq!(resolve_key_code("KEY_FORWARD"), Some(159));
        assert_eq!(resolve_key_code("KEY_EJECTCD"), Some(161));
        assert_eq!(resolve_key_code("KEY_FASTFORWARD"), Some(208));
        assert_eq!(resolve_key_code("KEY_SHUFFLE"), Some(0x19a));
        assert_eq!(resolve_key_code("KEY_PLAYCD"), Some(200));
    }

    #[test]
    fn aliases_share_a_code() {
        assert_eq!(resolve_key_code("KEY_ZOOM"), resolve_key_code("KEY_FULL_SCREEN"));
        assert_eq!(resolve_key_code("BTN_A"), resolve_key_code("BTN_SOUTH"));
        assert_eq!(resolve_key_code("BTN_MISC"), Some(256));
        assert_eq!(get_key_name(256), "BTN_0");
        assert_eq!(resolve_key_code("KEY_MAX"), None);
    }

    #[test]
    fn every_named_code_round_trips() {
        for code in KEY_NAMES.keys() {
            assert_eq!(resolve_key_code(get_key_name(*code)), Some(*code));
        }
    }

    #[test]
    fn resolves_numeric_codes() {
        assert_eq!(resolve_key_code(" 30 "), Some(30));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(resolve_key_code("KEY_DOESNOTEXIST"), None);
        assert_eq!(resolve_key_code(""), None);
    }

    #[test]
    fn names_round_trip() {
        for code in [1u16, 30, 113, 164, 256, 402] {
            assert_eq!(resolve_key_code(get_key_name(code)), Some(code));
        }
        assert_eq!(get_key_name(1000), "UNKNOWN");
    }

    #[test]
    fn value_names() {
        assert_eq!(get_value_name(0), "Release");
        assert_eq!(get_value_name(2), "Repeat");
        assert_eq!(get_value_name(7), "Unknown");
    }
}
